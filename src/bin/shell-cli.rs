use clap::{Parser, Subcommand};
use url::Url;

use pokedex_shell::config::ObservabilityConfig;
use pokedex_shell::observability::logging;
use pokedex_shell::{app_routes, PokemonRef, ShellClient};

#[derive(Parser)]
#[command(name = "shell-cli")]
#[command(about = "Inspect routes and drive the selection of a running shell", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:8080/")]
    server: Url,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a path against the route table (no server needed)
    Resolve { path: String },
    /// Replace the selected Pokemon
    Select {
        #[arg(long)]
        name: String,
        #[arg(long)]
        url: String,
    },
    /// Show the selected Pokemon
    Selected,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(&ObservabilityConfig {
        log_level: "warn".to_string(),
        ..Default::default()
    })?;

    match cli.command {
        Commands::Resolve { path } => {
            let routes = app_routes()?;
            let summary = routes.resolve(&path).summary(&path);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Select { name, url } => {
            let client = ShellClient::new(&cli.server)?;
            client.select(&PokemonRef::new(name, url)).await?;
        }
        Commands::Selected => {
            let client = ShellClient::new(&cli.server)?;
            let selected = client.selected().await?;
            println!("{}", serde_json::to_string_pretty(&selected)?);
        }
    }

    Ok(())
}
