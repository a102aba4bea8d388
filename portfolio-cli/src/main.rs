//! Portfolio CLI - talks to the portfolio site backend from the terminal.

use clap::Parser;
use portfolio_cmd::client::BackendClient;
use portfolio_core::config::SiteConfig;
use std::path::PathBuf;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Parser)]
#[command(
    name = "portfolio-cli",
    version,
    about = "Portfolio site backend toolkit"
)]
struct Cli {
    /// JSON site configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL, overrides `api_base` from the configuration
    #[arg(short, long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: portfolio_cmd::Command,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SiteConfig> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            Ok(SiteConfig::from_json(&json)?)
        }
        None => Ok(SiteConfig::default()),
    }
}

/// `--base-url` wins, then the configured `api_base`, then localhost.
fn resolve_base_url(flag: Option<String>, config: &SiteConfig) -> String {
    flag.or_else(|| Some(config.api_base.clone()).filter(|base| !base.is_empty()))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let base_url = resolve_base_url(cli.base_url, &config);
    log::info!("Using backend at {}", base_url);

    let client = BackendClient::new(&base_url)?;
    portfolio_cmd::run(cli.command, &client, config.default_count()?).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_base_url_precedence() {
        let mut config = SiteConfig::default();
        assert_eq!(resolve_base_url(None, &config), DEFAULT_BASE_URL);

        config.api_base = "https://portfolio.example".to_string();
        assert_eq!(resolve_base_url(None, &config), "https://portfolio.example");
        assert_eq!(
            resolve_base_url(Some("http://127.0.0.1:9000".to_string()), &config),
            "http://127.0.0.1:9000"
        );
    }

    #[test]
    fn test_cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["portfolio-cli", "votes", "--base-url", "http://x"]).unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://x"));
        assert_eq!(cli.command, portfolio_cmd::Command::Votes);
    }
}
