use anyhow::Context;
use clap::Parser;
use openalex_coauthors::{BatchDriver, Config, DEFAULT_BASE_URL, DEFAULT_INPUT_FILE, Error};
use std::{path::PathBuf, time::Duration};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "openalex-coauthors")]
#[command(about = "Export the OpenAlex co-authors of a list of ORCID iDs as CSV files")]
#[command(version)]
struct Cli {
    /// File with one ORCID iD per line (bare iD, not a URL)
    #[arg(long, short, default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// Contact email for the OpenAlex polite pool
    #[arg(long, env = "OPENALEX_MAILTO", default_value = "")]
    mailto: String,

    /// Seconds to wait between two page requests
    #[arg(long, default_value = "0.25", value_parser = parse_delay)]
    delay: Duration,

    /// Directory for the co_authors_<orcid>.csv files
    #[arg(long, short, default_value = ".")]
    output_dir: PathBuf,

    /// OpenAlex API root
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_delay(value: &str) -> Result<Duration, String> {
    let seconds = value
        .parse::<f64>()
        .map_err(|e| format!("invalid number of seconds: {}", e))?;
    Duration::try_from_secs_f64(seconds).map_err(|e| e.to_string())
}

impl Cli {
    fn config(&self) -> Config {
        Config::default()
            .with_input_file(&self.input)
            .with_mailto(&self.mailto)
            .with_delay(self.delay)
            .with_output_dir(&self.output_dir)
            .with_base_url(&self.base_url)
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    BatchDriver::new(config)
        .run()
        .await
        .context("batch processing stopped")?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli.config()).await {
        match e.downcast_ref::<Error>() {
            Some(Error::InputNotFound { path }) => {
                tracing::error!("ERROR: The input file '{}' was not found.", path.display());
                tracing::error!("Please create this file and add one ORCID iD per line.");
            }
            _ => tracing::error!("An unexpected error occurred: {:#}", e),
        }
    }
}
