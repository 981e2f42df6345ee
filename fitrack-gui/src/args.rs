//! Command-line argument parsing.

use std::{error::Error, fmt::Display, path::PathBuf, process};

use crate::dir::FitrackDirectory;

/// Parsed command-line argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    DatadirPath(FitrackDirectory),
}

/// Parse command-line arguments.
///
/// # Arguments
/// - `args`: Command-line arguments (including program name at args[0])
/// - `version`: Version to display for --version flag
pub fn parse_args(args: Vec<String>, version: impl Display) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    let app_name = args
        .first()
        .and_then(|a| std::path::Path::new(a).file_name())
        .and_then(|s| s.to_str())
        .unwrap_or("fitrack");

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", version);
        process::exit(0);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: {app_name} [OPTIONS]

Options:
    --datadir <PATH>    Path of fitrack datadir
    -v, --version       Display {app_name} version
    -h, --help          Print help
        "#
        );
        process::exit(0);
    }

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--datadir" {
            if let Some(a) = iter.next() {
                res.push(Arg::DatadirPath(FitrackDirectory::new(PathBuf::from(a))));
            } else {
                return Err("missing arg to --datadir".into());
            }
        } else {
            return Err(format!("unknown argument '{}'", arg).into());
        }
    }

    Ok(res)
}

/// Resolve the data directory from parsed arguments, falling back to the default one.
pub fn datadir_from_args(args: &[Arg]) -> Result<FitrackDirectory, Box<dyn Error>> {
    match args {
        [] => FitrackDirectory::new_default(),
        [Arg::DatadirPath(datadir_path)] => Ok(datadir_path.clone()),
        _ => Err("Unknown args combination".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSION: &str = "1.0.0";

    #[test]
    fn test_parse_args() {
        assert!(parse_args(vec!["app".into(), "--meth".into()], VERSION).is_err());
        assert!(parse_args(vec!["app".into(), "--datadir".into()], VERSION).is_err());
        assert_eq!(Some(vec![]), parse_args(vec!["app".into()], VERSION).ok());
        assert_eq!(
            Some(vec![Arg::DatadirPath(FitrackDirectory::new(PathBuf::from(
                "hello"
            )))]),
            parse_args(
                "app --datadir hello"
                    .split(' ')
                    .map(|a| a.to_string())
                    .collect(),
                VERSION,
            )
            .ok()
        );
    }

    #[test]
    fn test_datadir_from_args() {
        let dir = FitrackDirectory::new(PathBuf::from("hello"));
        assert_eq!(
            datadir_from_args(&[Arg::DatadirPath(dir.clone())]).ok(),
            Some(dir.clone())
        );
        let twice = [Arg::DatadirPath(dir.clone()), Arg::DatadirPath(dir)];
        assert!(datadir_from_args(&twice).is_err());
    }
}
