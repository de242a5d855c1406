//! Lingo-Map CLI - an interactive map of the top spoken languages per Indian state.
//!
//! Run `lingomap` to open the map. Hover a state to fetch its top languages
//! from the `most_spoken_languages` backend.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::config as config_cmd;
use config::Config;

/// Lingo-Map: hover a state, see what it speaks.
#[derive(Parser, Debug)]
#[command(
    name = "lingomap",
    author,
    version,
    about = "Lingo-Map: top spoken languages per state on an interactive map",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Override the lookup endpoint URL.
    #[arg(long, global = true, env = "LINGOMAP_ENDPOINT")]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive map (default command).
    View,

    /// Look up the top languages for one region and print the hover card.
    Lookup {
        /// Region display name, e.g. "Tamil Nadu".
        region: String,

        /// Number of languages to request.
        #[arg(short = 'n', long)]
        count: Option<u32>,

        /// Print the hover card as HTML instead of text.
        #[arg(long)]
        html: bool,
    },

    /// List regions with their values and map colours.
    Regions {
        /// Print the region data as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Manage CLI configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Get a configuration value.
    Get {
        /// Configuration key.
        key: String,
    },

    /// Reset configuration to defaults.
    Reset,

    /// Show path to config file.
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity; RUST_LOG wins when set
    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load()?;
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }

    match cli.command.unwrap_or(Commands::View) {
        Commands::View => {
            tokio::task::block_in_place(|| commands::view::execute(&config))?;
        }

        Commands::Lookup {
            region,
            count,
            html,
        } => {
            commands::lookup::execute(&config, &region, count, html).await?;
        }

        Commands::Regions { json } => {
            commands::regions::execute(&config, json)?;
        }

        Commands::Config(config_cmd_inner) => match config_cmd_inner {
            ConfigCommands::Show => {
                config_cmd::show(&config)?;
            }
            ConfigCommands::Set { key, value } => {
                // Edit the stored file, not the env/flag-adjusted view of it
                let mut stored = Config::load_file()?;
                config_cmd::set(&mut stored, &key, &value)?;
            }
            ConfigCommands::Get { key } => {
                config_cmd::get(&config, &key)?;
            }
            ConfigCommands::Reset => {
                config_cmd::reset()?;
            }
            ConfigCommands::Path => {
                if let Some(path) = Config::config_file_path() {
                    println!("{}", path.display());
                } else {
                    println!("(no config file path available)");
                }
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_view() {
        let cli = Cli::try_parse_from(["lingomap"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn lookup_parses_count_and_region() {
        let cli = Cli::try_parse_from(["lingomap", "lookup", "Tamil Nadu", "-n", "5"]).unwrap();
        match cli.command {
            Some(Commands::Lookup { region, count, html }) => {
                assert_eq!(region, "Tamil Nadu");
                assert_eq!(count, Some(5));
                assert!(!html);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_endpoint_flag_after_subcommand() {
        let cli = Cli::try_parse_from([
            "lingomap",
            "regions",
            "--endpoint",
            "http://localhost:9000/most_spoken_languages/",
        ])
        .unwrap();
        assert_eq!(
            cli.endpoint.as_deref(),
            Some("http://localhost:9000/most_spoken_languages/")
        );
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
