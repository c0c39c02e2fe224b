//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// Run a robotscript automation script
#[derive(Debug, Parser)]
#[command(name = "robotscript", version, about)]
pub struct CliArgs {
    /// Parse the script and print it as JSON instead of running it
    #[arg(long)]
    pub check: bool,

    /// Script file; prompted for when omitted
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("robotscript").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_is_well_formed() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_path_only() {
        let args = parse(&["script.yaml"]).unwrap();
        assert_eq!(args.path, Some(PathBuf::from("script.yaml")));
        assert!(!args.check);
    }

    #[test]
    fn test_no_args() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.path, None);
        assert!(!args.check);
    }

    #[test]
    fn test_check_flag() {
        let args = parse(&["--check", "dir/a.yaml"]).unwrap();
        assert!(args.check);
        assert_eq!(args.path, Some(PathBuf::from("dir/a.yaml")));
    }

    #[test]
    fn test_rejects_extra_and_unknown() {
        assert!(parse(&["a.yaml", "b.yaml"]).is_err());
        assert!(parse(&["--verbose"]).is_err());
    }
}
