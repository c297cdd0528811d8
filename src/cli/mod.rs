use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::clients::microcms::MicroCmsClient;
use crate::core::envelope::render_json;
use crate::core::query::QueryParams;
use crate::core::source::ContentSource;
use crate::infra::config::{Config, Mode};

#[derive(Parser)]
#[command(name = "microcms-mcp-gateway")]
#[command(about = "MCP server exposing microCMS content as tools and resources")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the MCP server (default)
    Serve,
    /// Validate configuration
    Config {
        /// Validate config without starting service
        #[arg(long)]
        validate: bool,
    },
    /// Health check a server running in http mode
    Health {
        /// Service URL to check
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
    /// Fetch contents once and print the JSON
    Fetch {
        /// Endpoint name
        endpoint: String,
        /// Content ID; omit to fetch the list
        #[arg(long)]
        id: Option<String>,
    },
}

pub async fn run() -> ExitCode {
    let cli = Cli::parse();

    run_commands(cli.command.unwrap_or(Commands::Serve)).await
}

pub async fn run_commands(command: Commands) -> ExitCode {
    match command {
        Commands::Serve => match crate::infra::boot::run_from_env().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!(error = %e, "server stopped");
                eprintln!("❌ {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Config { validate: _ } => match validate_config() {
            Ok(cfg) => {
                println!("✅ Configuration is valid");
                println!("  Mode: {}", cfg.mode);
                println!("  Base URL: {}", cfg.base_url);
                if cfg.mode == Mode::Http {
                    println!("  Port: {}", cfg.port);
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ Configuration validation failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Health { url } => match health_check(&url).await {
            Ok(_) => {
                println!("✅ Service is healthy");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ Health check failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Fetch { endpoint, id } => match fetch(&endpoint, id.as_deref()).await {
            Ok(body) => {
                println!("{}", body);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ Fetch failed: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn validate_config() -> Result<Config, Box<dyn std::error::Error>> {
    let cfg = Config::from_env()?;
    reqwest::Url::parse(&cfg.base_url)
        .map_err(|e| format!("Invalid base URL {}: {}", cfg.base_url, e))?;
    Ok(cfg)
}

async fn health_check(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/healthz", url.trim_end_matches('/')))
        .timeout(std::time::Duration::from_millis(500))
        .send()
        .await?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(format!("HTTP {}", response.status()).into())
    }
}

async fn fetch(endpoint: &str, id: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    let cfg = Config::from_env()?;
    let client = MicroCmsClient::from_config(&cfg)?;
    let query = QueryParams::new();
    let body = match id {
        Some(id) => client.fetch_one(endpoint, id, &query).await?,
        None => client.fetch_list(endpoint, &query).await?,
    };
    Ok(render_json(&body))
}
