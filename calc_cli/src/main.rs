#![forbid(unsafe_code)]

//! # Groundwork CLI
//!
//! Runs the estimating calculators from a terminal. Every command can print
//! JSON with `--json`, which is the same shape the web client consumes.
//!
//! ```text
//! calc_cli list --category asphalt
//! calc_cli fields concrete-volume
//! calc_cli compute asphalt-tonnage length=100 width=20 thickness=2
//! calc_cli --catalog site/calculators.json export-catalog out.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use calc_core::cache::{BuiltinSource, CatalogCache, CatalogSource, FileSource};
use calc_core::fields::{parse_loose, FieldType};
use calc_core::registry;
use calc_core::results::RecommendationKind;
use calc_core::{
    save_catalog, CalcError, CalcResult, CalculatorDescriptor, CalculatorResults, Catalog,
    Category, InputMap,
};
use clap::{ArgAction, Parser, Subcommand};
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "calc_cli")]
#[command(about = "Paving, concrete and earthwork estimating calculators")]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    /// Read calculator metadata from a catalog file instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List calculators, optionally for one category
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Show the input fields of a calculator
    Fields { id: String },
    /// Run a calculator with KEY=VALUE inputs
    Compute {
        id: String,
        #[arg(value_parser = parse_assignment)]
        inputs: Vec<(String, String)>,
        /// Pass only the given inputs instead of filling the rest from defaults
        #[arg(long, default_value_t = false)]
        no_defaults: bool,
    },
    /// Write the catalog to a JSON file
    ExportCatalog { path: PathBuf },
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.catalog.clone() {
        Some(path) => run(&cli, CatalogCache::new(FileSource::new(path))),
        None => run(&cli, CatalogCache::new(BuiltinSource)),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}

fn run<S: CatalogSource>(cli: &Cli, mut cache: CatalogCache<S>) -> CalcResult<()> {
    debug!(source = %cache.source().describe(), "loading catalog");
    let catalog = cache.get()?;

    match &cli.command {
        Commands::List { category } => {
            let category = category
                .as_deref()
                .map(|key| {
                    Category::from_key(key)
                        .ok_or_else(|| CalcError::invalid_input("category", key, "unknown category"))
                })
                .transpose()?;
            list(catalog, category, cli.json)
        }
        Commands::Fields { id } => show_fields(catalog.require(id)?, cli.json),
        Commands::Compute {
            id,
            inputs,
            no_defaults,
        } => {
            let inputs = build_inputs(catalog.get(id), inputs, *no_defaults);
            let results = registry::compute(id, &inputs);
            info!(calculator = %id, inputs = inputs.len(), "computed");
            print_results(&results, cli.json)
        }
        Commands::ExportCatalog { path } => {
            save_catalog(catalog, path)?;
            if cli.json {
                print_json(&json!({ "written": path.display().to_string(), "calculators": catalog.len() }))
            } else {
                println!("Wrote {} calculators to {}", catalog.len(), path.display());
                Ok(())
            }
        }
    }
}

/// Inputs for a run. Known fields are parsed by type; anything else is read loosely.
fn build_inputs(
    descriptor: Option<&CalculatorDescriptor>,
    pairs: &[(String, String)],
    no_defaults: bool,
) -> InputMap {
    match descriptor {
        Some(descriptor) if !no_defaults => descriptor.parse_form(pairs.iter().map(|(k, v)| (k, v))),
        Some(descriptor) => pairs
            .iter()
            .map(|(key, raw)| {
                let value = descriptor
                    .field(key)
                    .map(|field| field.parse_value(raw))
                    .unwrap_or_else(|| parse_loose(raw));
                (key.clone(), value)
            })
            .collect(),
        None => pairs.iter().map(|(key, raw)| (key.clone(), parse_loose(raw))).collect(),
    }
}

fn list(catalog: &Catalog, category: Option<Category>, as_json: bool) -> CalcResult<()> {
    let categories: Vec<Category> = match category {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };

    if as_json {
        let selected: Vec<&CalculatorDescriptor> = categories
            .iter()
            .flat_map(|c| catalog.by_category(*c))
            .collect();
        return print_json(&selected);
    }

    for category in categories {
        let calculators = catalog.by_category(category);
        if calculators.is_empty() {
            continue;
        }
        println!("{category}");
        for calc in calculators {
            println!("  {:<22} {} ({})", calc.id, calc.title, calc.time_estimate);
        }
    }
    Ok(())
}

fn field_type_name(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::Number => "number",
        FieldType::Select => "select",
        FieldType::Radio => "radio",
        FieldType::Checkbox => "checkbox",
    }
}

fn show_fields(descriptor: &CalculatorDescriptor, as_json: bool) -> CalcResult<()> {
    if as_json {
        return print_json(&descriptor.fields);
    }

    println!("{} - {}", descriptor.title, descriptor.description);
    if let Some(formula) = &descriptor.formula {
        println!("  formula: {formula}");
    }
    for field in &descriptor.fields {
        let unit = field.unit.as_deref().map(|u| format!(" {u}")).unwrap_or_default();
        println!(
            "  {:<20} {:<8} default {}{}",
            field.id,
            field_type_name(field.field_type),
            field.default_value,
            unit
        );
        if !field.options.is_empty() {
            let keys: Vec<&str> = field.options.iter().map(|o| o.value.as_str()).collect();
            println!("  {:<20} options: {}", "", keys.join(", "));
        }
    }
    Ok(())
}

fn print_results(results: &CalculatorResults, as_json: bool) -> CalcResult<()> {
    if as_json {
        return print_json(results);
    }

    for row in &results.results {
        let marker = if row.highlight { "*" } else { " " };
        println!("{marker} {:<30} {}", row.label, row.value);
    }
    if !results.recommendations.is_empty() {
        println!();
    }
    for rec in &results.recommendations {
        let tag = match rec.kind {
            RecommendationKind::Info => "info",
            RecommendationKind::Tip => "tip",
            RecommendationKind::Warning => "warning",
            RecommendationKind::Error => "error",
        };
        println!("[{tag}] {}", rec.text);
    }
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> CalcResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn report_error(err: &CalcError, as_json: bool) {
    if as_json {
        let body = json!({ "code": err.error_code(), "message": err.to_string(), "error": err });
        match serde_json::to_string_pretty(&body) {
            Ok(text) => println!("{text}"),
            Err(_) => eprintln!("Error: {err}"),
        }
    } else {
        eprintln!("Error: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::InputValue;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("length=100").unwrap(),
            ("length".to_string(), "100".to_string())
        );
        assert_eq!(
            parse_assignment("note=a=b").unwrap(),
            ("note".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_assignment("flag=").unwrap().1, "");
        assert!(parse_assignment("length").is_err());
        assert!(parse_assignment("=5").is_err());
    }

    #[test]
    fn test_build_inputs_fills_defaults() {
        let descriptor = Catalog::builtin().require("concrete-volume").unwrap();
        let pairs = vec![("length".to_string(), "12".to_string())];

        let filled = build_inputs(Some(descriptor), &pairs, false);
        assert_eq!(filled.get("length"), Some(&InputValue::Number(12.0)));
        assert_eq!(filled.len(), descriptor.fields.len());

        let bare = build_inputs(Some(descriptor), &pairs, true);
        assert_eq!(bare.len(), 1);
    }

    #[test]
    fn test_build_inputs_unknown_calculator() {
        let pairs = vec![
            ("a".to_string(), "1.5".to_string()),
            ("b".to_string(), "true".to_string()),
            ("c".to_string(), "gravel".to_string()),
        ];
        let inputs = build_inputs(None, &pairs, false);
        assert_eq!(inputs.get("a"), Some(&InputValue::Number(1.5)));
        assert_eq!(inputs.get("b"), Some(&InputValue::Bool(true)));
        assert_eq!(inputs.get("c"), Some(&InputValue::Text("gravel".to_string())));
    }

    #[test]
    fn test_cli_parses_compute() {
        let cli = Cli::try_parse_from([
            "calc_cli",
            "--json",
            "compute",
            "asphalt-tonnage",
            "length=100",
            "width=20",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Compute { id, inputs, no_defaults } => {
                assert_eq!(id, "asphalt-tonnage");
                assert_eq!(inputs.len(), 2);
                assert!(!no_defaults);
            }
            _ => panic!("expected compute"),
        }
    }
}
