// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

mod json;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use soapbind::model::loaders::DefinitionLoader;
use soapbind::schema::{build_schema, ArrayTypeEmitter, SchemaBuilder, SchemaContext};
use soapbind::{ResponseBinder, SchemaConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "soapbind-gen")]
#[command(about = "XSD array types and response binding for SOAP service definitions")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one type descriptor to its XSD complex type(s)
    Resolve {
        /// Type descriptor, e.g. "Item[]" or "int[][2,5]"
        #[arg(value_name = "DESCRIPTOR")]
        descriptor: String,

        /// Schema configuration (YAML)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print a JSON report instead of XML
        #[arg(long)]
        json: bool,
    },

    /// Render the xsd:schema for a service definition
    Schema {
        /// Service definition (.xml, .yaml or .yml)
        #[arg(value_name = "DEFINITION")]
        definition: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Schema configuration (YAML)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Bind a JSON response against a method's declared return type
    Bind {
        /// Service definition (.xml, .yaml or .yml)
        #[arg(value_name = "DEFINITION")]
        definition: PathBuf,

        /// Method whose return type is used
        #[arg(short, long)]
        method: String,

        /// JSON response file
        #[arg(short, long, value_name = "FILE")]
        response: PathBuf,
    },
}

#[derive(Serialize)]
struct ResolveReport {
    descriptor: String,
    type_name: Option<String>,
    complex_types: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("soapbind=debug,soapbind_gen=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Resolve {
            descriptor,
            config,
            json,
        } => cmd_resolve(&descriptor, config.as_deref(), json),
        Commands::Schema {
            definition,
            output,
            config,
        } => cmd_schema(&definition, output.as_deref(), config.as_deref()),
        Commands::Bind {
            definition,
            method,
            response,
        } => cmd_bind(&definition, &method, &response),
    }
}

fn load_config(path: Option<&Path>) -> Result<SchemaConfig> {
    match path {
        Some(path) => SchemaConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(SchemaConfig::default()),
    }
}

fn resolve_descriptor(
    descriptor: &str,
    config: Option<&Path>,
) -> Result<(SchemaContext, Option<String>)> {
    let schema = SchemaContext::new(load_config(config)?);
    let type_name = ArrayTypeEmitter::new(&schema)
        .resolve_array_complex_type(descriptor)
        .with_context(|| format!("cannot resolve '{}'", descriptor))?;
    Ok((schema, type_name))
}

fn cmd_resolve(descriptor: &str, config: Option<&Path>, json: bool) -> Result<()> {
    let (schema, type_name) = resolve_descriptor(descriptor, config)?;

    if json {
        let report = ResolveReport {
            descriptor: descriptor.to_string(),
            type_name: type_name.clone(),
            complex_types: schema.fragments().into_iter().map(|f| f.name).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match type_name {
        Some(name) => {
            println!("{}", name);
            for fragment in schema.fragments() {
                print!("{}", fragment.to_xml(&schema.config().xsd_prefix));
            }
        }
        None => {
            tracing::info!("'{}' has no array suffix", descriptor);
            println!("{}", schema.registered_xsd_type(descriptor.trim()));
        }
    }
    Ok(())
}

fn cmd_schema(definition: &Path, output: Option<&Path>, config: Option<&Path>) -> Result<()> {
    let service = DefinitionLoader::load(definition)
        .with_context(|| format!("failed to load {}", definition.display()))?;
    let schema = build_schema(&service, load_config(config)?)
        .with_context(|| format!("failed to build schema for service '{}'", service.name))?;
    tracing::info!(
        service = %service.name,
        complex_types = schema.len(),
        "Schema built"
    );

    let xml = schema.to_schema_xml();
    match output {
        Some(path) => {
            std::fs::write(path, xml)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("[OK] {} -> {}", definition.display(), path.display());
        }
        None => print!("{}", xml),
    }
    Ok(())
}

fn cmd_bind(definition: &Path, method: &str, response: &Path) -> Result<()> {
    let out = bind_response(definition, method, response)?;
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn bind_response(definition: &Path, method: &str, response: &Path) -> Result<serde_json::Value> {
    let service = DefinitionLoader::load(definition)
        .with_context(|| format!("failed to load {}", definition.display()))?;
    let Some(declared) = service.find_method(method) else {
        bail!("service '{}' has no method '{}'", service.name, method);
    };

    let raw = std::fs::read_to_string(response)
        .with_context(|| format!("failed to read {}", response.display()))?;
    let raw: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", response.display()))?;
    let value = json::JsonDecoder::new().decode(&raw)?;

    let registry = service.complex_type_registry();
    let bound = ResponseBinder::new()
        .process_message(&declared.return_type, value, &registry)
        .with_context(|| {
            format!(
                "response of '{}' does not match {}",
                method, declared.return_type
            )
        })?;

    Ok(json::JsonEncoder::new().encode(&bound))
}
