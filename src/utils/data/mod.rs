//! Data utilities

mod id_codec;

pub use id_codec::IdCodec;
