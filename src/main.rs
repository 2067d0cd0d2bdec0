//! glazekit - window and door schematic drawings from the command line

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glazekit::commands::{catalog_table, load_records, render_to_dir, write_default_config};
use glazekit::{init_logging, Config, OutputFormat, TypeCatalog, WindowCategory};
use glazekit_settings::default_config_path;

#[derive(Parser)]
#[command(name = "glazekit")]
#[command(version = glazekit::VERSION)]
#[command(long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"))]
#[command(about = "Scaled schematic drawings of window and door configurations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a window record or every window of a project file
    Render {
        /// Window record or project file (.json)
        input: PathBuf,
        /// Output directory (default: from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format: svg or json (default: from config)
        #[arg(short, long)]
        format: Option<OutputFormat>,
        /// Configuration file (.toml or .json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List the window and door types
    Catalog {
        /// Only list one category: window or door
        #[arg(long, value_parser = parse_category)]
        category: Option<WindowCategory>,
    },
    /// Manage the configuration file
    Config {
        /// Write the default configuration
        #[arg(long)]
        init: bool,
        /// Target file (default: platform config directory)
        file: Option<PathBuf>,
    },
}

fn parse_category(s: &str) -> Result<WindowCategory, String> {
    WindowCategory::parse(s).ok_or_else(|| format!("unknown category '{}'", s))
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            format,
            config,
        } => {
            let config = Config::load_or_default(config.as_deref())
                .context("Failed to load configuration")?;
            let records = load_records(&input)?;
            let dir = output.unwrap_or_else(|| config.output.output_directory.clone());
            let format = format.unwrap_or(config.output.format);

            let written = render_to_dir(&records, &config, &dir, format)?;
            println!("Rendered {} drawing(s) to {}", written.len(), dir.display());
        }
        Commands::Catalog { category } => {
            print!("{}", catalog_table(TypeCatalog::global(), category));
        }
        Commands::Config { init, file } => {
            let path = match file {
                Some(path) => path,
                None => default_config_path()
                    .context("No config directory on this platform; pass a file path")?,
            };
            if init {
                write_default_config(&path)?;
                println!("Wrote default configuration to {}", path.display());
            } else {
                let config = Config::load_or_default(Some(&path))?;
                println!("{:#?}", config);
            }
        }
    }

    Ok(())
}
