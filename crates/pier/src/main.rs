//! Command-line interface for the `pier` search front-end.

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use pier_ingest::{Document, build_index_document};
use pier_mapping::{MAPPING_FILENAME, Mapping, mapping_template};
use pier_query::{QueryParams, construct_aggregation_query, construct_query};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pier")]
#[command(about = "Search front-end toolbox - index documents and query bodies")]
/// Top-level CLI options.
struct Cli {
    /// Mapping configuration file
    #[arg(long, global = true, default_value = MAPPING_FILENAME)]
    mapping: PathBuf,

    #[command(subcommand)]
    /// Subcommand to execute.
    command: Commands,
}

#[derive(Subcommand)]
/// Supported `pier` subcommands.
enum Commands {
    /// Transform a request document into an index document
    Transform {
        /// Document JSON file; reads stdin when omitted
        file: Option<PathBuf>,
    },

    /// Build a search query body from query parameters
    Query {
        /// Query parameter as KEY=VALUE; repeat the flag for repeated keys
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Results per page (defaults to the mapping's page size)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Build an aggregation query body
    Aggregate {
        /// Field to aggregate; repeat the flag for several fields
        #[arg(short = 'f', long = "field", required = true)]
        fields: Vec<String>,

        /// Query parameter as KEY=VALUE; repeat the flag for repeated keys
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Results per page (defaults to the mapping's page size)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Validate the mapping and report warnings
    Check,

    /// Write a starter mapping file
    Init {
        /// Overwrite an existing mapping file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Transform { file } => cmd_transform(&cli.mapping, file.as_deref()),
        Commands::Query { params, page_size } => {
            cmd_query(&cli.mapping, &params, page_size)
        }
        Commands::Aggregate {
            fields,
            params,
            page_size,
        } => cmd_aggregate(&cli.mapping, &fields, &params, page_size),
        Commands::Check => cmd_check(&cli.mapping),
        Commands::Init { force } => cmd_init(&cli.mapping, force),
    }
}

/// Loads the mapping, reporting failures in CLI style.
fn load_mapping(path: &Path) -> Result<Mapping, ExitCode> {
    Mapping::load(path).map_err(|error| {
        eprintln!("error: {error}");
        ExitCode::FAILURE
    })
}

/// Parses repeated `KEY=VALUE` arguments into query parameters.
fn parse_params(raw_params: &[String]) -> Result<QueryParams, ExitCode> {
    let mut params = QueryParams::new();
    for raw in raw_params {
        match raw.split_once('=') {
            Some((key, value)) => params.append(key, value),
            None => {
                eprintln!("error: invalid parameter '{raw}': expected KEY=VALUE");
                return Err(ExitCode::FAILURE);
            }
        }
    }
    Ok(params)
}

/// Prints a JSON body to stdout, pretty-printed.
fn print_body(body: &Value) -> ExitCode {
    match serde_json::to_string_pretty(body) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: failed to render JSON: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Implements the `pier transform` command.
fn cmd_transform(mapping_path: &Path, file: Option<&Path>) -> ExitCode {
    let mapping = match load_mapping(mapping_path) {
        Ok(mapping) => mapping,
        Err(code) => return code,
    };

    let contents = match read_document(file) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("error: failed to read document: {error}");
            return ExitCode::FAILURE;
        }
    };

    let document: Document = match serde_json::from_str(&contents) {
        Ok(document) => document,
        Err(error) => {
            eprintln!("error: failed to parse document: {error}");
            return ExitCode::FAILURE;
        }
    };

    let index_document = build_index_document(&mapping, document);
    print_body(&Value::Object(index_document))
}

/// Reads the request document from a file, or stdin when no file is given.
fn read_document(file: Option<&Path>) -> io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut contents = String::new();
            io::stdin().read_to_string(&mut contents)?;
            Ok(contents)
        }
    }
}

/// Implements the `pier query` command.
fn cmd_query(mapping_path: &Path, raw_params: &[String], page_size: Option<usize>) -> ExitCode {
    let mapping = match load_mapping(mapping_path) {
        Ok(mapping) => mapping,
        Err(code) => return code,
    };
    let params = match parse_params(raw_params) {
        Ok(params) => params,
        Err(code) => return code,
    };

    match construct_query(&mapping, &params, page_size.unwrap_or(mapping.page_size)) {
        Ok(body) => print_body(&body),
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Implements the `pier aggregate` command.
fn cmd_aggregate(
    mapping_path: &Path,
    fields: &[String],
    raw_params: &[String],
    page_size: Option<usize>,
) -> ExitCode {
    let mapping = match load_mapping(mapping_path) {
        Ok(mapping) => mapping,
        Err(code) => return code,
    };
    let params = match parse_params(raw_params) {
        Ok(params) => params,
        Err(code) => return code,
    };

    let page_size = page_size.unwrap_or(mapping.page_size);
    match construct_aggregation_query(&mapping, &params, fields, page_size) {
        Ok(body) => print_body(&body),
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Implements the `pier check` command.
fn cmd_check(mapping_path: &Path) -> ExitCode {
    let mapping = match load_mapping(mapping_path) {
        Ok(mapping) => mapping,
        Err(code) => return code,
    };

    let warnings = mapping.validate();
    for warning in &warnings {
        println!("warning: {warning}");
    }

    println!(
        "mapping OK: {} text fields, {} filter fields, {} non-filter fields, {} transformations",
        mapping.text_fields.len(),
        mapping.filter_fields.len(),
        mapping.non_filter_fields.len(),
        mapping.transforms.len(),
    );

    ExitCode::SUCCESS
}

/// Implements the `pier init` command.
fn cmd_init(mapping_path: &Path, force: bool) -> ExitCode {
    if mapping_path.exists() && !force {
        eprintln!(
            "error: mapping file already exists: {}",
            mapping_path.display()
        );
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    if let Err(error) = fs::write(mapping_path, mapping_template()) {
        eprintln!(
            "error: failed to write {}: {error}",
            mapping_path.display()
        );
        return ExitCode::FAILURE;
    }

    println!("Created {}", mapping_path.display());
    ExitCode::SUCCESS
}
