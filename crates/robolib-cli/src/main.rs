//! Command-line interface for robolib keyword libraries.

use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};

use robolib_api::LibraryKind;
use robolib_core::config::{defaults, env_vars};
use robolib_core::{check, KeywordLibrary, LibraryLoader, LoaderConfig, Status};
use robolib_testing::{library_by_name, Calculator, LIBRARY_NAMES};

/// robolib - Inspect, run and check keyword libraries.
#[derive(Parser, Debug)]
#[command(name = "robolib")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Action to perform.
    #[command(subcommand)]
    command: Command,

    /// Library to use. Defaults to ROBOLIB_LIBRARY, then Calculator.
    #[arg(short, long, global = true)]
    library: Option<String>,

    /// Fail on the first invalid keyword instead of skipping it.
    #[arg(long, global = true)]
    strict: bool,

    /// Verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Command {
    /// List bundled libraries.
    Libraries,
    /// List keywords of the library.
    List,
    /// Show keyword information as JSON.
    Show {
        /// Keyword name, exactly as listed.
        keyword: String,
    },
    /// Run a keyword.
    Run {
        /// Keyword name, exactly as listed.
        keyword: String,
        /// Positional arguments. Valid JSON is used as is, anything else as a string.
        #[arg(allow_negative_numbers = true)]
        args: Vec<String>,
        /// Named argument as `name=value`.
        #[arg(short, long = "named", value_parser = parse_named)]
        named: Vec<(String, Value)>,
        /// Print the outcome as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Check the library for conformance.
    Check {
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    init_logging(args.verbose);

    let library = args
        .library
        .or_else(env_vars::library)
        .unwrap_or_else(|| Calculator::NAME.to_string());
    let mut config = LoaderConfig::from_env();
    if args.strict {
        config = config.strict(true);
    }

    match args.command {
        Command::Libraries => list_libraries(),
        Command::List => list_keywords(&load(&library, config)?),
        Command::Show { keyword } => show_keyword(&load(&library, config)?, &keyword),
        Command::Run {
            keyword,
            args,
            named,
            json,
        } => run_keyword(&load(&library, config)?, &keyword, &args, named, json),
        Command::Check { json } => check_library(&find(&library)?, json),
    }
}

/// Initialize logging on stderr so stdout stays machine readable.
fn init_logging(verbose: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = if verbose {
            "robolib=debug"
        } else {
            defaults::LOG_FILTER
        };
        tracing_subscriber::EnvFilter::new(directive)
    });

    if env_vars::log_json() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .compact()
            .with_writer(std::io::stderr)
            .init();
    }
}

fn find(name: &str) -> Result<LibraryKind> {
    library_by_name(name).ok_or_else(|| {
        anyhow!(
            "Unknown library '{}'. Available libraries: {}",
            name,
            LIBRARY_NAMES.join(", ")
        )
    })
}

fn load(name: &str, config: LoaderConfig) -> Result<KeywordLibrary> {
    let kind = find(name)?;
    let library = LibraryLoader::new(config)
        .load(kind)
        .inspect_err(|e| tracing::error!(library = name, error = %e, "Library load failed"))
        .with_context(|| format!("Failed to load library '{}'", name))?;
    tracing::debug!(
        library = library.name(),
        keywords = library.keyword_names().len(),
        skipped = library.skipped().len(),
        "Loaded library"
    );
    Ok(library)
}

fn list_libraries() -> Result<ExitCode> {
    for name in LIBRARY_NAMES {
        let kind = find(name)?;
        println!("{:<12} {} API", name, kind.api_name());
    }
    Ok(ExitCode::SUCCESS)
}

fn list_keywords(library: &KeywordLibrary) -> Result<ExitCode> {
    let metadata = library.metadata();
    match &metadata.version {
        Some(version) => println!("{} {} ({} API)", library.name(), version, library.kind().api_name()),
        None => println!("{} ({} API)", library.name(), library.kind().api_name()),
    }
    println!();

    let width = library
        .keyword_names()
        .iter()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0);
    for keyword in library.keywords() {
        println!("  {:<width$}  {}", keyword.name, keyword.short_doc, width = width);
    }

    if !library.skipped().is_empty() {
        println!();
        println!("Skipped: {}", library.skipped().join(", "));
    }
    Ok(ExitCode::SUCCESS)
}

fn show_keyword(library: &KeywordLibrary, name: &str) -> Result<ExitCode> {
    let info = library
        .keyword(name)
        .ok_or_else(|| anyhow!("No keyword with name '{}' found.", name))?;
    println!("{}", serde_json::to_string_pretty(info)?);
    Ok(ExitCode::SUCCESS)
}

fn run_keyword(
    library: &KeywordLibrary,
    name: &str,
    args: &[String],
    named: Vec<(String, Value)>,
    json: bool,
) -> Result<ExitCode> {
    let args: Vec<Value> = args.iter().map(|a| parse_value(a)).collect();
    let named: Map<String, Value> = named.into_iter().collect();

    let outcome = library.run(name, &args, &named);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        match &outcome.message {
            Some(message) => println!("{}: {}", outcome.status, message),
            None => println!("{}", outcome.status),
        }
        if outcome.passed() && !outcome.return_value.is_null() {
            println!("Return: {}", outcome.return_value);
        }
    }

    Ok(match outcome.status {
        Status::Pass => ExitCode::SUCCESS,
        Status::Fail => ExitCode::from(1),
        Status::Skip => ExitCode::from(3),
    })
}

fn check_library(kind: &LibraryKind, json: bool) -> Result<ExitCode> {
    let report = check(kind);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} ({} API): {} keyword(s)",
            report.library, report.api, report.keywords
        );
        for issue in &report.issues {
            println!("  - {}", issue);
        }
        if report.is_conformant() {
            println!("Conformance: PASSED");
        } else {
            println!("Conformance: FAILED ({} issue(s))", report.issues.len());
        }
    }

    Ok(if report.is_conformant() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// JSON when the text parses as JSON, otherwise the text as a string.
fn parse_value(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

fn parse_named(text: &str) -> std::result::Result<(String, Value), String> {
    match text.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), parse_value(value)))
        }
        _ => Err(format!("expected `name=value`, got `{}`", text)),
    }
}
