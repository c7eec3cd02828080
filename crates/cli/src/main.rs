//! Shape Model Generator CLI
//!
//! Command-line interface for turning cloud API service schemas into
//! resource model classes.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use shape_model_generator_common::{GeneratorConfig, Model, ShapeKind};
use shape_model_generator_compiler::RootDriver;
use shape_model_generator_generator::ModelRenderer;
use shape_model_generator_parser::{infer_service_name, load_schema, SchemaDirectory};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "shape-model-generator")]
#[command(version, about = "Generate resource models from cloud API service schemas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a schema file and display its shapes
    #[command(after_help = "EXAMPLES:\n  \
        # Summarize a botocore service model\n  \
        shape-model-generator inspect --schema botocore/data/iam/2010-05-08/service-2.json\n\n  \
        # Show the members of one shape\n  \
        shape-model-generator inspect --schema iam.json --shape AccessKeyMetadata")]
    Inspect {
        /// Path to the schema file
        #[arg(short, long)]
        schema: PathBuf,

        /// Schema format (auto-detected if not specified)
        #[arg(short, long)]
        format: Option<SchemaFormatArg>,

        /// Service name (inferred from the file name if not specified)
        #[arg(long)]
        service: Option<String>,

        /// Shape to display in detail
        #[arg(long)]
        shape: Option<String>,
    },

    /// Compile the configured roots and print the model IR
    #[command(after_help = "EXAMPLES:\n  \
        shape-model-generator compile \\\n    \
        --config models.yaml \\\n    \
        --schema-dir botocore/data \\\n    \
        --output yaml")]
    Compile {
        /// Path to the YAML run configuration
        #[arg(short, long)]
        config: PathBuf,

        /// Directory holding one schema per service
        #[arg(long)]
        schema_dir: PathBuf,

        /// Schema format (auto-detected per file if not specified)
        #[arg(short, long)]
        format: Option<SchemaFormatArg>,

        /// Serialization of the printed models
        #[arg(short, long, default_value = "json")]
        output: OutputFormat,
    },

    /// Compile the configured roots and render Python model classes
    #[command(after_help = "EXAMPLES:\n  \
        shape-model-generator generate \\\n    \
        --config models.yaml \\\n    \
        --schema-dir botocore/data \\\n    \
        --output ./generated/aws_models.py")]
    Generate {
        /// Path to the YAML run configuration
        #[arg(short, long)]
        config: PathBuf,

        /// Directory holding one schema per service
        #[arg(long)]
        schema_dir: PathBuf,

        /// Schema format (auto-detected per file if not specified)
        #[arg(short, long)]
        format: Option<SchemaFormatArg>,

        /// Output file (printed to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SchemaFormatArg {
    /// botocore service-2.json
    Botocore,
    /// Smithy JSON AST
    Smithy,
}

impl From<SchemaFormatArg> for shape_model_generator_parser::SchemaFormat {
    fn from(arg: SchemaFormatArg) -> Self {
        match arg {
            SchemaFormatArg::Botocore => Self::Botocore,
            SchemaFormatArg::Smithy => Self::Smithy,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Inspect {
            schema,
            format,
            service,
            shape,
        } => {
            inspect_command(
                schema.as_path(),
                format,
                service.as_deref(),
                shape.as_deref(),
                cli.verbose,
            )?;
        }
        Commands::Compile {
            config,
            schema_dir,
            format,
            output,
        } => {
            compile_command(config.as_path(), schema_dir.as_path(), format, output)?;
        }
        Commands::Generate {
            config,
            schema_dir,
            format,
            output,
        } => {
            generate_command(
                config.as_path(),
                schema_dir.as_path(),
                format,
                output.as_deref(),
            )?;
        }
    }

    Ok(())
}

fn inspect_command(
    schema_path: &Path,
    format: Option<SchemaFormatArg>,
    service_name: Option<&str>,
    shape_name: Option<&str>,
    verbose: bool,
) -> Result<()> {
    println!("{} Parsing schema file: {}", "→".cyan(), schema_path.display());

    let service = service_name
        .map(String::from)
        .or_else(|| infer_service_name(schema_path))
        .unwrap_or_else(|| "unknown".to_string());

    let schema = load_schema(schema_path, &service, format.map(Into::into))
        .context("Failed to load schema")?;

    println!("\n{}", "✓ Parse successful!".green().bold());
    println!("\n{}", "Service Schema:".bold());
    println!("  Name: {}", schema.name.yellow());
    println!("  Shapes: {}", schema.shapes.len());

    let count = |predicate: fn(&ShapeKind) -> bool| {
        schema.shapes.values().filter(|s| predicate(&s.kind)).count()
    };
    println!(
        "  Structures: {}",
        count(|k| matches!(k, ShapeKind::Structure { .. }))
    );
    println!("  Lists: {}", count(|k| matches!(k, ShapeKind::List { .. })));
    println!("  Maps: {}", count(|k| matches!(k, ShapeKind::Map { .. })));

    if let Some(name) = shape_name {
        let Some(shape) = schema.shape(name) else {
            bail!("Shape {} not found in {}", name, schema.name);
        };

        println!("\n{} {} ({})", "Shape".bold(), shape.name.cyan(), shape.type_name());
        if let Some(doc) = &shape.documentation {
            println!("  {}", doc.dimmed());
        }
        match &shape.kind {
            ShapeKind::Structure { members } => {
                for (member, member_ref) in members {
                    let target_type = schema
                        .shape(&member_ref.target)
                        .map(|s| s.type_name())
                        .unwrap_or("missing");
                    println!("  • {}: {} ({})", member, member_ref.target.cyan(), target_type);
                }
            }
            ShapeKind::List { member } => println!("  member: {}", member.target.cyan()),
            ShapeKind::Map { key, value } => {
                println!("  key: {}", key.target.cyan());
                println!("  value: {}", value.target.cyan());
            }
            ShapeKind::Scalar { .. } | ShapeKind::Other { .. } => {}
        }
    } else if verbose {
        println!("\n{}", "Shapes:".bold());
        for shape in schema.shapes.values() {
            println!("  • {} ({})", shape.name.cyan(), shape.type_name());
        }
    }

    Ok(())
}

fn compile_command(
    config_path: &Path,
    schema_dir: &Path,
    format: Option<SchemaFormatArg>,
    output: OutputFormat,
) -> Result<()> {
    let models = compile_models(config_path, schema_dir, format)?;

    let serialized = match output {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&models).context("Failed to serialize models")?
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(&models).context("Failed to serialize models")?
        }
    };
    println!("{}", serialized);

    Ok(())
}

fn generate_command(
    config_path: &Path,
    schema_dir: &Path,
    format: Option<SchemaFormatArg>,
    output: Option<&Path>,
) -> Result<()> {
    let models = compile_models(config_path, schema_dir, format)?;

    let renderer = ModelRenderer::new().context("Failed to create renderer")?;

    match output {
        Some(path) => {
            eprintln!("{} Rendering model classes...", "→".cyan());
            renderer
                .write_to_file(&models, path)
                .context("Failed to write models")?;

            eprintln!("\n{}", "✓ Generation complete!".green().bold());
            eprintln!("  📄 {}", path.display());
        }
        None => {
            let rendered = renderer
                .render_all(&models)
                .context("Failed to render models")?;
            println!("{}", rendered);
        }
    }

    Ok(())
}

/// Load the configuration and compile every configured root
///
/// Progress goes to stderr so stdout carries only the result.
fn compile_models(
    config_path: &Path,
    schema_dir: &Path,
    format: Option<SchemaFormatArg>,
) -> Result<Vec<Model>> {
    eprintln!("{} Loading config: {}", "→".cyan(), config_path.display());
    let config = GeneratorConfig::from_file(config_path).context("Failed to load config")?;
    eprintln!(
        "  {} services, {} roots",
        config.services.len(),
        config.root_count()
    );

    let provider = SchemaDirectory::new(schema_dir).with_format(format.map(Into::into));
    eprintln!("{} Compiling models from {}", "→".cyan(), schema_dir.display());
    let models = RootDriver::new(&provider)
        .compile_all(&config)
        .context("Failed to compile models")?;

    let roots = models.iter().filter(|m| m.is_root).count();
    eprintln!(
        "{} Compiled {} models ({} roots)",
        "✓".green(),
        models.len(),
        roots
    );

    Ok(models)
}
