use anyhow::{Context, Result};
use beer_machine_core::app::{App, AppBuilder, seed_defaults};
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing::info;

mod observability;
mod shell;

#[derive(Parser, Debug)]
#[command(name = "beer-machine", version, about = "Beer style and playlist for a temperature")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recommend a style and its playlist for a temperature
    Recommend {
        /// Temperature in degrees Celsius
        #[arg(long, short, allow_hyphen_values = true)]
        temperature: f64,

        /// Start from an empty catalogue
        #[arg(long)]
        no_seed: bool,
    },
    /// Print the default catalogue, sorted by name
    Styles,
    /// Read catalogue commands from stdin, one per line
    Shell {
        /// Start from an empty catalogue
        #[arg(long)]
        no_seed: bool,
    },
}

async fn seeded(app: &App, seed: bool) -> Result<()> {
    if seed {
        seed_defaults(&app.catalog)
            .await
            .context("seed default styles")?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();
    let cli = Cli::parse();

    let app = AppBuilder::from_env()
        .context("read configuration")?
        .build()
        .await;

    match cli.command {
        Command::Recommend {
            temperature,
            no_seed,
        } => {
            seeded(&app, !no_seed).await?;
            let recommendation = app
                .recommender
                .recommend(temperature)
                .await
                .with_context(|| format!("recommend for {temperature}"))?;
            println!("{}", serde_json::to_string_pretty(&recommendation)?);
        }
        Command::Styles => {
            seeded(&app, true).await?;
            let styles = app.catalog.list().await?;
            println!("{}", serde_json::to_string_pretty(&styles)?);
        }
        Command::Shell { no_seed } => {
            seeded(&app, !no_seed).await?;
            info!(provider = %app.provider, "shell ready, type `help` for commands");
            let stdin = BufReader::new(tokio::io::stdin());
            shell::run(&app, stdin, tokio::io::stdout())
                .await
                .context("shell i/o")?;
        }
    }
    Ok(())
}
