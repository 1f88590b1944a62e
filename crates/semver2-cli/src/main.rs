//! Command-line front end for the semver2 library.
//!
//! ```text
//! semver2-cli validate 1.0.0-rc.1+build.1
//! semver2-cli parse 2.0.0-alpha.123.abc+build.42 --json
//! semver2-cli compare 1.0.0-alpha 1.0.0-alpha.1
//! semver2-cli sort 1.0.0 1.0.0-rc.1 0.9.0
//! ```

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use semver2::{compare_sign, parse, scan, sort_by_precedence, SemverError, Validation, Version};

#[derive(Parser, Debug)]
#[command(name = "semver2-cli", version, about = "Validate, parse and order SemVer 2.0.0 versions")]
struct Cli {
    /// Emit JSON instead of plain text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a string against the grammar and print which sections it has.
    Validate {
        #[arg(value_name = "VERSION")]
        input: String,
    },
    /// Parse a version and print its fields.
    Parse {
        #[arg(value_name = "VERSION")]
        input: String,
    },
    /// Compare two versions by precedence; prints -1, 0 or 1.
    Compare { a: String, b: String },
    /// Print versions in ascending precedence.
    Sort {
        #[arg(required = true)]
        versions: Vec<String>,
    },
}

#[derive(Serialize)]
struct ValidateReport<'a> {
    input: &'a str,
    accepted: bool,
    has_primary: bool,
    has_pre_release: bool,
    has_build: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct ParseReport<'a> {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: &'a [String],
    build: Option<&'a str>,
    canonical: &'a Version,
}

#[derive(Serialize)]
struct CompareReport<'a> {
    a: &'a Version,
    b: &'a Version,
    result: i32,
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::metadata::LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!(error = %e, "failed to render JSON"),
    }
}

fn run_validate(input: &str, json: bool) -> bool {
    let (flags, error) = match scan(input.as_bytes()) {
        Ok(sections) => (Validation::from(&sections), None),
        Err(e) => (Validation::default(), Some(e.to_string())),
    };

    if json {
        print_json(&ValidateReport {
            input,
            accepted: flags.accepted,
            has_primary: flags.has_primary,
            has_pre_release: flags.has_pre_release,
            has_build: flags.has_build,
            error,
        });
    } else {
        println!(
            "accepted: {}, has_primary: {}, has_pre_release: {}, has_build: {}",
            flags.accepted, flags.has_primary, flags.has_pre_release, flags.has_build
        );
        if let Some(error) = error {
            eprintln!("{}", error);
        }
    }
    flags.accepted
}

fn run_parse(input: &str, json: bool) -> Result<(), SemverError> {
    let v = parse(input)?;
    if json {
        print_json(&ParseReport {
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            pre_release: v.pre_release(),
            build: v.build(),
            canonical: &v,
        });
    } else {
        println!("major: {}", v.major);
        println!("minor: {}", v.minor);
        println!("patch: {}", v.patch);
        if let Some(pre_release) = v.pre_release_str() {
            println!("pre-release: {}", pre_release);
        }
        if let Some(build) = v.build() {
            println!("build: {}", build);
        }
    }
    Ok(())
}

fn run_compare(a: &str, b: &str, json: bool) -> Result<(), SemverError> {
    let a = parse(a)?;
    let b = parse(b)?;
    let result = compare_sign(&a, &b);
    if json {
        print_json(&CompareReport { a: &a, b: &b, result });
    } else {
        println!("{}", result);
    }
    Ok(())
}

fn run_sort(inputs: &[String], json: bool) -> Result<(), SemverError> {
    let mut versions = inputs
        .iter()
        .map(|s| parse(s))
        .collect::<Result<Vec<_>, _>>()?;
    sort_by_precedence(&mut versions);

    if json {
        print_json(&versions);
    } else {
        for v in &versions {
            println!("{}", v);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, json = cli.json, "starting");

    let result = match &cli.command {
        Command::Validate { input } => match run_validate(input, cli.json) {
            true => Ok(ExitCode::SUCCESS),
            false => Ok(ExitCode::from(1)),
        },
        Command::Parse { input } => run_parse(input, cli.json).map(|_| ExitCode::SUCCESS),
        Command::Compare { a, b } => run_compare(a, b, cli.json).map(|_| ExitCode::SUCCESS),
        Command::Sort { versions } => run_sort(versions, cli.json).map(|_| ExitCode::SUCCESS),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
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
    fn test_parse_args() {
        let cli = Cli::try_parse_from(["semver2-cli", "compare", "1.0.0", "2.0.0", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Command::Compare { .. }));

        assert!(Cli::try_parse_from(["semver2-cli", "sort"]).is_err());
        assert!(Cli::try_parse_from(["semver2-cli", "validate"]).is_err());
    }

    #[test]
    fn test_run_validate() {
        assert!(run_validate("1.0.0-alpha", false));
        assert!(!run_validate("1.0.0-", true));
    }

    #[test]
    fn test_run_errors() {
        assert!(run_parse("1.0", false).is_err());
        assert!(run_compare("1.0.0", "x", false).is_err());
        assert!(run_sort(&["1.0.0".to_string(), "01.0.0".to_string()], false).is_err());
        assert!(run_sort(&["1.0.0".to_string(), "1.0.0-rc.1".to_string()], true).is_ok());
    }
}
