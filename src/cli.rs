//! Command-line interface for expand-template
//!
//! Uses clap with derive for type-safe CLI parsing

use clap::Parser;
use std::path::PathBuf;

/// Expand a template into its generated source file
///
/// Reads <BASENAME>Template.elm, replaces every `LITTLE_TO_ELM <name>` line
/// with the named source from SOURCEFOLDER, and rewrites
/// <BASENAME>Generated.elm only if its content changed. The marker, file
/// suffixes and extensions shown are defaults; --config can change them.
#[derive(Parser, Debug)]
#[command(name = "expand-template")]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// Base name of the template and generated files
    #[arg(value_name = "BASENAME")]
    pub base: String,

    /// Folder directive names are resolved against (default: ../examples/)
    #[arg(value_name = "SOURCEFOLDER")]
    pub source_folder: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report whether the generated file is current without writing it
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_base_only() {
        let cli = Cli::try_parse_from(["expand-template", "Prelude"]).unwrap();
        assert_eq!(cli.base, "Prelude");
        assert!(cli.source_folder.is_none());
        assert!(!cli.check);
    }

    #[test]
    fn test_base_and_folder() {
        let cli = Cli::try_parse_from(["expand-template", "Prelude", "../lib/", "--check"]).unwrap();
        assert_eq!(cli.source_folder, Some(PathBuf::from("../lib/")));
        assert!(cli.check);
    }

    #[test]
    fn test_help_names_defaults() {
        let cmd = Cli::command();
        let about = cmd.get_long_about().unwrap().to_string();
        assert!(about.contains("are defaults"));
        assert!(about.contains("--config can change them"));
    }

    #[test]
    fn test_wrong_argument_count() {
        assert!(Cli::try_parse_from(["expand-template"]).is_err());
        assert!(Cli::try_parse_from(["expand-template", "a", "b", "c"]).is_err());
    }
}
