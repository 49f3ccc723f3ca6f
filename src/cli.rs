//! Command line interface for inspecting the access policy

use crate::auth::rbac::{AccessPolicy, Feature, Role, RoleTag, allowed_roles};
use crate::config::Config;
use crate::core::models::user::User;
use crate::utils::data::IdCodec;
use crate::utils::error::Result;
use crate::{NAME, build_info};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Inspect and exercise the console access policy
#[derive(Debug, Parser)]
#[command(name = "access-policy", version, about)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true, env = "TRACKER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the feature x role permission table
    Matrix {
        /// Emit JSON instead of a text table
        #[arg(long)]
        json: bool,
    },
    /// Check whether a role may use a feature
    Check {
        #[arg(long)]
        role: String,
        #[arg(long)]
        feature: String,
        /// Reject unknown roles and features instead of denying them
        #[arg(long)]
        strict: bool,
    },
    /// Check whether a role may create accounts with another role
    CanCreate {
        #[arg(long)]
        role: String,
        #[arg(long)]
        target: String,
    },
    /// Obfuscate a numeric ID
    EncodeId { id: u64 },
    /// Recover a numeric ID
    DecodeId { value: String },
    /// Print build information
    Version,
}

/// How a command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Allowed,
    Denied,
}

impl Outcome {
    fn from_decision(granted: bool) -> Self {
        if granted { Outcome::Allowed } else { Outcome::Denied }
    }

    /// Process exit status: denials exit non-zero so scripts can branch on them
    pub fn exit_status(self) -> u8 {
        match self {
            Outcome::Done | Outcome::Allowed => 0,
            Outcome::Denied => 1,
        }
    }
}

#[derive(Debug, Serialize)]
struct MatrixRow {
    feature: Feature,
    allowed_roles: &'static [Role],
}

impl Command {
    /// Run the command, writing its output to `out`
    pub fn execute(&self, config: &Config, out: &mut dyn Write) -> Result<Outcome> {
        let policy = AccessPolicy::new(config.policy());

        match self {
            Command::Matrix { json } => {
                if *json {
                    write_matrix_json(out)?;
                } else {
                    write_matrix_table(out)?;
                }
                Ok(Outcome::Done)
            }
            Command::Check {
                role,
                feature,
                strict,
            } => {
                if *strict {
                    role.parse::<Role>()?;
                    feature.parse::<Feature>()?;
                }
                let user = User::new(0, "cli", RoleTag::parse(role));
                let decision = policy.evaluate(Some(&user), feature);
                match &decision.denial_reason {
                    None => writeln!(out, "allow")?,
                    Some(reason) => writeln!(out, "deny ({})", reason)?,
                }
                Ok(Outcome::from_decision(decision.granted))
            }
            Command::CanCreate { role, target } => {
                let user = User::new(0, "cli", RoleTag::parse(role));
                let granted = policy.can_create_role(Some(&user), &RoleTag::parse(target));
                writeln!(out, "{}", if granted { "allow" } else { "deny" })?;
                Ok(Outcome::from_decision(granted))
            }
            Command::EncodeId { id } => {
                writeln!(out, "{}", IdCodec::new(config.id_codec()).encode(*id))?;
                Ok(Outcome::Done)
            }
            Command::DecodeId { value } => {
                let id = IdCodec::new(config.id_codec()).decode_or_err(value)?;
                writeln!(out, "{}", id)?;
                Ok(Outcome::Done)
            }
            Command::Version => {
                let info = build_info();
                writeln!(
                    out,
                    "{} {} (git {}, built {}, {})",
                    NAME, info.version, info.git_hash, info.build_time, info.rust_version,
                )?;
                Ok(Outcome::Done)
            }
        }
    }
}

fn write_matrix_table(out: &mut dyn Write) -> Result<()> {
    let width = Feature::ALL
        .iter()
        .map(|f| f.as_str().len())
        .max()
        .unwrap_or_default();

    write!(out, "{:width$}", "feature")?;
    for role in Role::ALL {
        write!(out, "  {}", role)?;
    }
    writeln!(out)?;

    for feature in Feature::ALL {
        write!(out, "{:width$}", feature.as_str())?;
        for role in Role::ALL {
            let mark = if allowed_roles(feature).contains(&role) { "x" } else { "-" };
            write!(out, "  {:^w$}", mark, w = role.as_str().len())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_matrix_json(out: &mut dyn Write) -> Result<()> {
    let rows: Vec<MatrixRow> = Feature::ALL
        .into_iter()
        .map(|feature| MatrixRow {
            feature,
            allowed_roles: allowed_roles(feature),
        })
        .collect();
    writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
    Ok(())
}
