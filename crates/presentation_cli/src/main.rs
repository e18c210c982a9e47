//! Geocoder CLI
//!
//! Command-line front end for the geocoding client: forward and reverse
//! lookups against the live service, and offline parsing of saved responses.

#![allow(clippy::print_stdout)]

mod settings;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use integration_geocoding::{
    GeocodeResponse, Geocoder, GeocoderConfig, GeocodingClient, ResponseFormat, parser,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Geocoder CLI
#[derive(Debug, Parser)]
#[command(name = "geocoder-cli")]
#[command(author, version, about = "Geocode addresses and reverse geocode coordinates", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a TOML configuration file (default: ./geocoder.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API key for the geocoding service
    #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the service base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Override the request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up the coordinates of an address
    Geocode {
        /// Address to search for
        address: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Look up the address at a coordinate pair
    Reverse {
        /// Latitude, e.g. 40.714224
        #[arg(allow_negative_numbers = true)]
        latitude: f64,

        /// Longitude, e.g. -73.961452
        #[arg(allow_negative_numbers = true)]
        longitude: f64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Parse a saved response body without contacting the service
    Parse {
        /// File containing a JSON or XML response
        file: PathBuf,

        /// Format of the file (json or xml)
        #[arg(short, long, default_value = "json")]
        format: String,
    },
}

#[derive(Debug, clap::Args)]
struct OutputArgs {
    /// Response format requested from the service (json or xml)
    #[arg(short, long, default_value = "json")]
    format: String,

    /// Print the response body as received
    #[arg(long)]
    raw: bool,

    /// Use the blocking client instead of the async one
    #[arg(long)]
    blocking: bool,
}

#[derive(Debug, Clone)]
enum Lookup {
    Address(String),
    Point { latitude: f64, longitude: f64 },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_geocoder(api_key: Option<String>, config: &GeocoderConfig) -> anyhow::Result<Geocoder> {
    let api_key = api_key.context("an API key is required (--api-key or GOOGLE_MAPS_API_KEY)")?;
    Ok(Geocoder::new(api_key, config)?)
}

/// Run one lookup and return the raw body
async fn fetch(
    geocoder: Geocoder,
    lookup: Lookup,
    format: ResponseFormat,
    blocking: bool,
) -> anyhow::Result<String> {
    if blocking {
        let body = tokio::task::spawn_blocking(move || match lookup {
            Lookup::Address(address) => geocoder.geocode_raw_blocking(&address, format),
            Lookup::Point {
                latitude,
                longitude,
            } => geocoder.reverse_geocode_raw_blocking(latitude, longitude, format),
        })
        .await
        .context("blocking lookup task failed")??;
        return Ok(body);
    }

    let body = match lookup {
        Lookup::Address(address) => geocoder.geocode_raw(&address, format).await?,
        Lookup::Point {
            latitude,
            longitude,
        } => {
            geocoder
                .reverse_geocode_raw(latitude, longitude, format)
                .await?
        },
    };
    Ok(body)
}

/// Render a parsed response as one line per result
fn render(response: &GeocodeResponse) -> String {
    let mut out = format!("Status: {}", response.status);
    if let Some(message) = &response.error_message {
        out.push_str(&format!("\nMessage: {message}"));
    }
    for (i, result) in response.results.iter().enumerate() {
        out.push_str(&format!(
            "\n{}. {} ({})",
            i + 1,
            result.formatted_address,
            result.coordinates()
        ));
    }
    out
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (lookup, output) = match cli.command {
        Commands::Parse { file, format } => {
            let format: ResponseFormat = format.parse()?;
            let body = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let response = parser::parse(&body, format)?;
            println!("{}", render(&response));
            return Ok(());
        },
        Commands::Geocode { address, output } => (Lookup::Address(address), output),
        Commands::Reverse {
            latitude,
            longitude,
            output,
        } => (
            Lookup::Point {
                latitude,
                longitude,
            },
            output,
        ),
    };

    // Reject bad formats before touching the network
    let format: ResponseFormat = output.format.parse()?;

    let config = settings::load(
        cli.config.as_deref(),
        settings::Overrides {
            base_url: cli.base_url,
            timeout_secs: cli.timeout_secs,
        },
    )?;
    let geocoder = build_geocoder(cli.api_key, &config)?;

    info!(
        ?lookup,
        %format,
        blocking = output.blocking,
        base_url = %geocoder.config().base_url,
        "Running lookup"
    );
    let body = fetch(geocoder, lookup, format, output.blocking).await?;

    if output.raw {
        println!("{body}");
    } else {
        println!("{}", render(&parser::parse(&body, format)?));
    }

    Ok(())
}
