use crate::command::replace::ReplaceArgs;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::ffi::OsString;

/// Long flags that may also be spelled with a single dash (`-gomod go.mod`).
///
/// Bool flags take an optional `=value` (`-clean=false`), as Go's `flag` does.
const SINGLE_DASH_FLAGS: &[&str] = &["gomod", "config", "clean", "dry-run", "verbose"];

#[derive(Parser, Debug)]
#[command(name = "modreplace", version)]
#[command(about = "Redirect go.mod dependencies to local checkouts with replace directives")]
pub struct Cli {
    #[command(flatten)]
    pub args: ReplaceArgs,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(
        long,
        short = 'v',
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub verbose: bool,
}

impl Cli {
    /// Parses process arguments, accepting single-dash long flags.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrites `-flag` and `-flag=value` to `--flag...` for known long flags.
///
/// The program name, short flags, unknown words, and everything after a bare
/// `--` pass through unchanged.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;

    for (idx, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if idx == 0 || passthrough {
            out.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some(s) if is_single_dash_long(s) => Some(OsString::from(format!("-{}", s))),
            _ => None,
        };
        out.push(rewritten.unwrap_or(arg));
    }

    out
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_FLAGS.contains(&name)
}
