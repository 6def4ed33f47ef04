/**
 * TypeScript Introspector - ts-introspect
 *
 * Print the enum schema of TypeScript modules as JSON
 */
use anyhow::{bail, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;
use rayon::prelude::*;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;
use ts_introspector::{scan_module, OxcIntrospectionHost, ScannerOptions};

fn main() {
    let matches = Command::new("ts-introspect")
        .version(ts_introspector::version())
        .about("Print the enum schema of TypeScript modules as JSON")
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .help("TypeScript modules to scan")
                .num_args(1..)
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("JSON file with scanner options")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("decorator")
                .short('d')
                .long("decorator")
                .value_name("NAME")
                .help("Decorator marking enum classes (default: enumType)"),
        )
        .arg(
            Arg::new("no-ts-enums")
                .long("no-ts-enums")
                .help("Ignore `enum` declarations")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help("Indent the JSON output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log debug events to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("error: {:#}", err);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let mut options = match matches.get_one::<PathBuf>("config") {
        Some(path) => ScannerOptions::load(path)
            .with_context(|| format!("failed to load options from {}", path.display()))?,
        None => ScannerOptions::default(),
    };
    if let Some(decorator) = matches.get_one::<String>("decorator") {
        options.enum_decorator = decorator.trim_start_matches('@').to_string();
    }
    if matches.get_flag("no-ts-enums") {
        options.include_ts_enums = false;
    }

    let files: Vec<&PathBuf> = matches
        .get_many::<PathBuf>("files")
        .map(|files| files.collect())
        .unwrap_or_default();

    let modules = files
        .par_iter()
        .map(|path| -> anyhow::Result<(String, Value)> {
            Ok((path.display().to_string(), introspect_file(path, &options)?))
        })
        .collect::<anyhow::Result<Vec<(String, Value)>>>()?;

    let output = Value::Object(modules.into_iter().collect::<Map<String, Value>>());
    let text = if matches.get_flag("pretty") {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", text);
    Ok(())
}

fn introspect_file(path: &Path, options: &ScannerOptions) -> anyhow::Result<Value> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let source_type = SourceType::from_path(path).unwrap_or_else(|_| SourceType::ts());

    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, &source, source_type).parse();
    if !ret.errors.is_empty() {
        for error in &ret.errors {
            tracing::error!(file = %path.display(), "{:?}", error);
        }
        bail!(
            "failed to parse {}: {} error(s)",
            path.display(),
            ret.errors.len()
        );
    }

    let host = OxcIntrospectionHost::new(path.display().to_string(), &ret.program);
    let enums = scan_module(&ret.program, &host, options)
        .with_context(|| format!("failed to introspect {}", path.display()))?;
    tracing::info!(file = %path.display(), enums = enums.len(), "scanned module");

    Ok(enums.to_json()?)
}
