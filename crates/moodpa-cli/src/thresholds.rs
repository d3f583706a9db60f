//! # Thresholds Subcommand
//!
//! Prints the effective municipal profile as YAML: the defaults, or the
//! profile given with `--profile` after validation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::load_profile;

/// Arguments for `moodpa thresholds`.
#[derive(Args, Debug)]
pub struct ThresholdsArgs {
    /// Municipal profile (YAML) to validate and print.
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Print JSON instead of YAML.
    #[arg(long)]
    pub json: bool,
}

/// Execute the thresholds subcommand.
pub fn run_thresholds(args: &ThresholdsArgs) -> Result<u8> {
    let profile = load_profile(args.profile.as_deref())?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print!("{}", serde_yaml::to_string(&profile)?);
    }
    Ok(0)
}
