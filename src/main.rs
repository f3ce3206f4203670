//! @ai:module:intent CLI entry point for blueprint parsing and tooling
//! @ai:module:layer presentation
//! @ai:module:public_api main
//! @ai:module:depends_on parser, validate, discover, template, config, language, output

use blueprints::{
    discover_blueprints, init_blueprint, output, output_path_for, validate, Config, Error,
    NotationParser, OutputFormat, TargetLanguage, ValidationConfig,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "blueprints")]
#[command(author, version, about = "Blueprints.md - compact module blueprint tools")]
struct Cli {
    /// Enable verbose output
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a blueprint file and show its structure
    Parse {
        /// Path to the blueprint file
        path: PathBuf,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,
    },

    /// Validate a blueprint file or every blueprint in a directory
    Validate {
        /// Path to file or directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Warn when a module has no description line
        #[arg(long)]
        require_description: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,
    },

    /// Discover blueprint files in a directory
    Discover {
        /// Directory to search
        #[arg(default_value = ".")]
        directory: PathBuf,
    },

    /// Initialize a new blueprint file
    Init {
        /// Module name, also used as the file name
        module_name: String,

        /// Output directory (default: current directory)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },

    /// Show where generated code for a blueprint would be written
    Target {
        /// Path to the blueprint file
        path: PathBuf,

        /// Target language (default: from configuration)
        #[arg(long, short)]
        language: Option<String>,

        /// Directory used when the blueprint has no file location
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Show the effective configuration
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    JsonPretty,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "blueprints=debug" } else { "blueprints=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// @ai:intent Build configuration from an optional file plus environment overrides
/// @ai:effects fs:read, env
fn load_config(path: Option<&Path>) -> blueprints::Result<Config> {
    let base = match path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    base.with_env_overrides(|key| std::env::var(key).ok())
}

/// @ai:intent Pick the generation language from the flag, else the configuration
/// @ai:effects pure
fn resolve_language(flag: Option<&str>, config: &Config) -> blueprints::Result<TargetLanguage> {
    match flag {
        Some(name) => TargetLanguage::from_name(name)
            .ok_or_else(|| Error::Config(format!("unsupported language: {}", name))),
        None => config.target_language(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };
    debug!(model = %config.model, language = %config.language, "loaded configuration");

    match cli.command {
        Commands::Parse { path, format } => match NotationParser::new().parse_file(&path) {
            Ok(document) => {
                info!(
                    module = %document.module_name,
                    components = document.components.len(),
                    "parsed blueprint"
                );
                println!("{}", output::format_document(&document, format.into()));
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(2)
            }
        },

        Commands::Validate {
            path,
            require_description,
            format,
        } => {
            let validation = ValidationConfig {
                require_description,
                extensions: config.extensions.clone(),
                ..Default::default()
            };

            let result = if path.is_file() {
                Ok(validate::validate_file(&path, &validation))
            } else {
                validate::validate_directory(&path, &validation)
            };

            match result {
                Ok(result) => {
                    println!("{}", output::format_validation_result(&result, format.into()));

                    if result.passed() {
                        ExitCode::SUCCESS
                    } else {
                        ExitCode::from(1)
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::from(2)
                }
            }
        }

        Commands::Discover { directory } => {
            if !directory.is_dir() {
                eprintln!("Error: {} is not a directory", directory.display());
                return ExitCode::from(2);
            }

            let found = discover_blueprints(&directory, &config.extensions);
            if found.is_empty() {
                println!("No blueprint files found");
            } else {
                println!("Found {} blueprint files:", found.len());
                for path in &found {
                    let shown = path.strip_prefix(&directory).unwrap_or(path.as_path());
                    println!("  {}", shown.display());
                }
            }
            ExitCode::SUCCESS
        }

        Commands::Init {
            module_name,
            output,
            force,
        } => {
            let dir = output.unwrap_or_else(|| PathBuf::from("."));
            match init_blueprint(&module_name, &dir, force) {
                Ok(path) => {
                    println!("Created blueprint file: {}", path.display());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::from(2)
                }
            }
        }

        Commands::Target {
            path,
            language,
            out_dir,
        } => {
            let target = resolve_language(language.as_deref(), &config).and_then(|language| {
                let document = NotationParser::new().parse_file(&path)?;
                Ok((output_path_for(&document, language, &out_dir), language))
            });

            match target {
                Ok((target, language)) => {
                    debug!(language = %language, path = %target.display(), "resolved output path");
                    println!("{}", target.display());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::from(2)
                }
            }
        }

        Commands::Config => match toml::to_string_pretty(&config.redacted()) {
            Ok(text) => {
                print!("{}", text);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(2)
            }
        },
    }
}
