//! # abiparam
//!
//! Command-line front end for ABI parameter encoding and decoding.
//!
//! ## Usage
//!
//! ```bash
//! # Type commands
//! abiparam types
//! abiparam types --arrays
//! abiparam resolve uint256
//! abiparam resolve bytes32[]
//!
//! # Codec commands
//! abiparam encode bytes32 hello
//! abiparam encode 'uint8[]' '["1", "2"]'
//! abiparam decode bytes32 0x68656c6c6f000000000000000000000000000000000000000000000000000000
//! abiparam parse bool TRUE
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use config::Config;
pub use error::CliError;
pub use output::Output;

/// ABI parameter codec CLI
#[derive(Parser, Debug)]
#[command(name = "abiparam")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,

    /// Log filter (overrides the configured level)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// CLI commands
#[derive(Debug, Subcommand)]
enum Commands {
    /// List every supported type name
    Types {
        /// List dynamic-array names instead
        #[arg(long)]
        arrays: bool,
    },
    /// Describe a type name
    Resolve {
        /// Type name, e.g. uint256 or bytes32[]
        name: String,
    },
    /// Encode a parameter value
    Encode {
        /// Type name
        #[arg(value_name = "TYPE")]
        type_name: String,
        /// Raw value (a JSON array for array types)
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Decode a value returned by a contract call
    Decode {
        /// Type name
        #[arg(value_name = "TYPE")]
        type_name: String,
        /// Value: 0x-hex for byte types, decimal for integers, true/false for bool
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Parse a value by type name
    Parse {
        /// Type name
        #[arg(value_name = "TYPE")]
        type_name: String,
        /// Raw value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Show or edit configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Set the log level
        #[arg(long)]
        set_log_level: Option<String>,
        /// Enable or disable the integer range check
        #[arg(long)]
        set_check_range: Option<bool>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let mut config = Config::load(cli.config_path.as_deref());
    let json = cli.json || config.json;

    let level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::debug!("Loaded configuration: {:?}", config);

    let result = match cli.command {
        Commands::Types { arrays } => commands::types::list_types(arrays, json),
        Commands::Resolve { name } => commands::types::resolve(&name, json),
        Commands::Encode { type_name, value } => {
            commands::codec::encode(&config, &type_name, &value, json)
        }
        Commands::Decode { type_name, value } => commands::codec::decode(&type_name, &value, json),
        Commands::Parse { type_name, value } => commands::codec::parse(&type_name, &value, json),
        Commands::Config {
            show,
            set_log_level,
            set_check_range,
        } => handle_config(
            &mut config,
            cli.config_path.as_deref(),
            show,
            set_log_level,
            set_check_range,
            json,
        ),
    };

    if let Err(e) = result {
        if json {
            println!(
                "{}",
                serde_json::json!({
                    "code": e.code(),
                    "error": e.to_string(),
                    "success": false
                })
            );
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn handle_config(
    config: &mut Config,
    path: Option<&std::path::Path>,
    show: bool,
    set_log_level: Option<String>,
    set_check_range: Option<bool>,
    json: bool,
) -> Result<(), CliError> {
    let mut modified = false;

    if let Some(level) = set_log_level {
        config.log_level = level;
        modified = true;
    }

    if let Some(check) = set_check_range {
        config.encoder.check_int_range = check;
        modified = true;
    }

    if modified {
        config.save(path)?;
        Output::new(json)
            .field("status", "saved")
            .message("Configuration saved")
            .print();
    } else if show {
        Output::new(json)
            .field("log_level", &config.log_level)
            .field_bool("json", config.json)
            .field_bool("check_int_range", config.encoder.check_int_range)
            .message(&format!(
                "Log level: {}\nJSON output: {}\nInteger range check: {}",
                config.log_level, config.json, config.encoder.check_int_range
            ))
            .print();
    } else {
        Output::new(json)
            .message("Use --show to display config, or --set-log-level/--set-check-range to modify")
            .print();
    }

    Ok(())
}
