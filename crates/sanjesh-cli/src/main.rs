use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use sanjesh_cli::commands;
use sanjesh_cli::config::{self, LogFormat, SanjeshConfig};
use sanjesh_instruments::engine::ScoringPolicy;

#[derive(Debug, Parser)]
#[command(name = "sanjesh", version, about = "Score self-report questionnaires")]
struct Cli {
    /// Config file (defaults to the platform config dir).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List built-in instruments.
    List,
    /// Print an instrument's full definition as JSON.
    Show { id: String },
    /// Check every built-in instrument table.
    Validate,
    /// Score an answer file (or stdin) and print the result as JSON.
    Score {
        id: String,
        /// JSON object of ordinal → option index or response label.
        #[arg(long)]
        answers: Option<PathBuf>,
        /// Refuse incomplete answer sets.
        #[arg(long)]
        strict: bool,
    },
    /// Write a default config file.
    InitConfig,
}

fn init_tracing(config: &SanjeshConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    // init-config must work before any config file exists.
    let config = match cli.command {
        Command::InitConfig => SanjeshConfig::default(),
        _ => config::load_config(cli.config.as_deref())?,
    };
    init_tracing(&config);

    match cli.command {
        Command::List => {
            let instruments = commands::list_instruments()?;
            println!("{}", serde_json::to_string_pretty(&instruments)?);
        }
        Command::Show { id } => println!("{}", commands::show_instrument(&id)?),
        Command::Validate => {
            let count = commands::validate_registry()?;
            println!("{count} instruments OK");
        }
        Command::Score {
            id,
            answers,
            strict,
        } => {
            let policy = if strict {
                ScoringPolicy::RequireComplete
            } else {
                config.scoring_policy
            };
            let result = commands::score(&id, answers.as_deref(), policy)?;
            println!("{}", result.to_json()?);
        }
        Command::InitConfig => init_config(cli.config)?,
    }

    Ok(())
}

fn init_config(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    if path.exists() {
        return Err(eyre::eyre!("config already exists at {}", path.display()));
    }
    config::save_config(&SanjeshConfig::default(), &path)?;
    println!("wrote {}", path.display());
    Ok(())
}
