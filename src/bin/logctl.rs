use std::path::PathBuf;
use clap::{Parser, Subcommand};
use stderr_logging::config::{load_config, LogConfig};
use stderr_logging::observability::metrics::prometheus_handle;
use stderr_logging::{Fields, Level, RequestContext};

#[derive(Parser)]
#[command(name = "logctl")]
#[command(about = "Write log lines through the process logging setup", long_about = None)]
struct Cli {
    /// Minimum level; overrides the config file
    #[arg(short, long)]
    level: Option<String>,

    /// TOML logging config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tenant identifier attached to every line
    #[arg(long)]
    org_id: Option<String>,

    /// User identifier attached to every line
    #[arg(long)]
    user_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit one message to stderr
    Emit {
        /// Level of the message
        #[arg(short, long, default_value = "info")]
        at: String,

        /// Extra field as key=value (repeatable)
        #[arg(short, long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,

        /// Print log message counters afterwards
        #[arg(long)]
        show_metrics: bool,

        message: Vec<String>,
    },
    /// List accepted level names and their line labels
    Levels,
}

fn parse_field(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, v)) if !k.is_empty() => Ok((k.to_string(), v.to_string())),
        _ => Err(format!("expected key=value, got {:?}", s)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LogConfig::default(),
    };
    if let Some(level) = cli.level {
        config.level = level;
    }
    stderr_logging::setup_with(&config)?;

    match cli.command {
        Commands::Emit { at, fields, show_metrics, message } => {
            let level: Level = at.parse()?;

            let mut ctx = RequestContext::new();
            if let Some(org_id) = cli.org_id {
                ctx = ctx.with_org_id(org_id);
            }
            if let Some(user_id) = cli.user_id {
                ctx = ctx.with_user_id(user_id);
            }
            let extra: Fields = fields.into_iter().collect();
            let entry = stderr_logging::with(&ctx).with_fields(extra);
            let message = message.join(" ");

            match level {
                Level::Fatal => entry.fatal(message),
                Level::Panic => entry.panic(message),
                _ => entry.log(level, message),
            }

            if show_metrics {
                match prometheus_handle() {
                    Some(handle) => print!("{}", handle.render()),
                    None => eprintln!("Error: metrics are disabled"),
                }
            }
        }
        Commands::Levels => {
            for level in Level::ALL {
                println!("{:<8} {}", level.as_str(), level.label());
            }
        }
    }

    Ok(())
}
