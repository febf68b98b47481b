use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tracing::{error, info};

use web_scrapers::config::Config;
use web_scrapers::{logging, pipeline};

/// Scraper orchestrator
#[derive(Parser, Debug)]
#[command(name = "web-scrapers", version, about)]
struct Cli {
    /// Run the IMDb top-movies scraper
    #[arg(long, visible_alias = "imdb")]
    movies: bool,

    /// Run the quotes scraper
    #[arg(long)]
    quotes: bool,

    /// Run every scraper
    #[arg(long)]
    all: bool,

    /// Settings file (defaults to ./scrapers.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if !(cli.movies || cli.quotes || cli.all) {
        Cli::command().print_help()?;
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;
    let _log_guard = logging::init(&config.log_dir)?;

    if cli.all || cli.movies {
        let movies = pipeline::run_movies(&config).await;
        info!("IMDb task finished with {} movies", movies.len());
    }

    if cli.all || cli.quotes {
        if let Err(e) = pipeline::run_quotes(&config).await {
            error!("Quotes scraper aborted: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imdb_is_an_alias_for_movies() {
        let cli = Cli::try_parse_from(["web-scrapers", "--imdb"]).unwrap();
        assert!(cli.movies);
        assert!(!cli.quotes);
    }

    #[test]
    fn flags_combine() {
        let cli = Cli::try_parse_from(["web-scrapers", "--quotes", "--config", "x.toml"]).unwrap();
        assert!(cli.quotes);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
