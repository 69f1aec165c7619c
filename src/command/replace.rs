use crate::config::{Rule, load_rules};
use crate::error::{ReplaceError, Result};
use crate::ops::{
    append_directives, find_matches, format_directive, scan_manifest, strip_content,
    strip_directives,
};
use crate::validation::validate_local_paths;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args};
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone)]
pub struct ReplaceArgs {
    /// Path to the go.mod file
    #[arg(long, value_name = "PATH", default_value = "go.mod.test")]
    pub gomod: PathBuf,

    /// Path to a config containing find and replace rules
    #[arg(long, value_name = "PATH", default_value = "replace.yaml")]
    pub config: PathBuf,

    /// Remove all replace directives and exit
    #[arg(
        long,
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub clean: bool,

    /// Show what would change without writing the manifest
    #[arg(
        long,
        short = 'n',
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub dry_run: bool,
}

/// Runs the strip, load, match, validate, append pipeline.
///
/// Each step runs only if the previous one succeeded. Steps already applied
/// are not undone, so a failed validation leaves the manifest stripped.
pub fn execute(args: &ReplaceArgs) -> Result<()> {
    if args.dry_run {
        return preview(args);
    }

    strip_directives(&args.gomod)?;

    if args.clean {
        log::debug!("Clean only, skipping {}", args.config.display());
        return Ok(());
    }

    let rules = load_rules(&args.config)?;
    let matches = scan_manifest(&args.gomod, &rules)?;
    validate_local_paths(&matches)?;
    append_directives(&args.gomod, &matches)?;

    Ok(())
}

/// Read-only variant of [`execute`]: prints the directives that would be
/// removed and added.
fn preview(args: &ReplaceArgs) -> Result<()> {
    let read_err = |source: io::Error| ReplaceError::ManifestRead {
        path: args.gomod.clone(),
        source,
    };
    let file = File::open(&args.gomod).map_err(read_err)?;
    let stripped = strip_content(BufReader::new(file)).map_err(read_err)?;

    let matches = if args.clean {
        Vec::new()
    } else {
        let rules = load_rules(&args.config)?;
        let matches = find_matches(stripped.content.as_slice(), &rules).map_err(read_err)?;
        validate_local_paths(&matches)?;
        matches
    };

    print_preview(&args.gomod, &stripped.removed, &matches);
    Ok(())
}

fn print_preview(manifest: &Path, removed: &[String], added: &[Rule]) {
    println!("{}", "DRY RUN - No changes will be made".yellow().bold());
    println!("\n{} {}", "Manifest:".bold(), manifest.display());

    if removed.is_empty() && added.is_empty() {
        println!("\n{}", "No changes needed".yellow());
        return;
    }

    if !removed.is_empty() {
        println!("\n{} ({})", "Remove".bold(), removed.len());
        for line in removed {
            println!("   {} {}", "-".red(), line.red());
        }
    }

    if !added.is_empty() {
        println!("\n{} ({})", "Append".bold(), added.len());
        for rule in added {
            println!("   {} {}", "+".green(), format_directive(rule).green());
        }
    }

    println!("\nRun without {} to apply.", "--dry-run".cyan());
}
