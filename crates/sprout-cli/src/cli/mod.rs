//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and value enums.  No business logic lives here.
//!
//! There are deliberately no subcommands and no functional flags: running
//! `sprout` launches the interactive flow unconditionally.  Only ambient
//! flags (verbosity, color, config) exist.

use clap::Parser;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sprout",
    bin_name = "sprout",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{269b} Interactive React component scaffolding",
    long_about = "Sprout asks a handful of questions and writes a ready-to-edit \
                  React component file where you point it.",
    after_help = "EXAMPLES:\n\
        \x20 sprout            # start the interactive flow\n\
        \x20 sprout -v         # same, with progress logging\n\
        \x20 sprout --no-color # same, plain output"
)]
pub struct Cli {
    /// Ambient flags; everything else is asked interactively.
    #[command(flatten)]
    pub global: GlobalArgs,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_parses() {
        let cli = Cli::try_parse_from(["sprout"]).unwrap();
        assert_eq!(cli.global.verbose, 0);
        assert!(!cli.global.quiet);
    }

    #[test]
    fn verbosity_counts_up() {
        let cli = Cli::try_parse_from(["sprout", "-vv"]).unwrap();
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["sprout", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_argument_is_rejected() {
        // No subcommands, no positional args.
        assert!(Cli::try_parse_from(["sprout", "new"]).is_err());
    }
}
