//! forge - blueprint generation CLI
//!
//! Thin shell around the pure `meshforge` generator: derives a blueprint
//! from a prompt and writes it as JSON to stdout or a file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "forge")]
#[command(about = "Deterministic prompt-to-blueprint generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a blueprint from a prompt
    Generate {
        /// Prompt text (empty input falls back to "abstract artifact")
        prompt: Vec<String>,

        /// Write JSON to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,

        /// Print only the derived seed
        #[arg(long)]
        seed_only: bool,
    },

    /// List the theme catalog
    Themes,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            prompt,
            out,
            compact,
            seed_only,
        } => {
            let prompt = prompt.join(" ");
            let prompt = (!prompt.trim().is_empty()).then_some(prompt.as_str());
            let blueprint = meshforge::generate(prompt);

            tracing::info!(
                seed = blueprint.seed,
                meshes = blueprint.meshes.len(),
                environment = %blueprint.environment,
                "generated blueprint"
            );

            if seed_only {
                println!("{}", blueprint.seed);
                return Ok(());
            }

            let json = if compact {
                blueprint.to_json()?
            } else {
                blueprint.to_json_pretty()?
            };

            match out {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), "wrote blueprint");
                }
                None => println!("{json}"),
            }
        }

        Commands::Themes => {
            for theme in meshforge::THEMES {
                println!(
                    "{:?}: environment={} accent={} keywords={}",
                    theme.id,
                    theme.environment,
                    theme.accent,
                    theme.keywords.join(", ")
                );
            }
        }
    }

    Ok(())
}
