use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use edge_router::config::{load_config, RouterConfig};
use edge_router::routing::{Destination, Router};
use edge_router::tracking::{TrackingClient, TrackingError, TrackingRecord};

#[derive(Parser)]
#[command(name = "edge-cli")]
#[command(about = "Management CLI for the edge router", long_about = None)]
struct Cli {
    /// Base URL of a running router.
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a shipment by tracking number
    Track {
        number: String,
        /// Print the raw JSON record
        #[arg(long)]
        json: bool,
    },
    /// Query the API service health endpoint through the router
    Health,
    /// Show which origin a path would be forwarded to
    Classify {
        path: String,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Track { number, json } => {
            let client = TrackingClient::new(&cli.url);
            match client.lookup(&number).await {
                Ok(record) if json => println!("{}", serde_json::to_string_pretty(&record)?),
                Ok(record) => print_record(&record),
                Err(TrackingError::NotFound) => {
                    eprintln!("We couldn't find any shipment with tracking number {}", number.trim().to_uppercase());
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Health => {
            let res = reqwest::get(format!("{}/health", cli.url.trim_end_matches('/'))).await?;
            let status = res.status();
            let body: Value = res.json().await?;
            println!("{status}");
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Commands::Classify { path, config } => {
            let config = match config {
                Some(path) => load_config(&path)?,
                None => RouterConfig::default(),
            };
            let router = Router::from_config(&config.routing);
            let destination = router.classify(&path);
            let origin = match destination {
                Destination::Backend => &config.origins.backend,
                Destination::Frontend => &config.origins.frontend,
            };
            println!("{path} -> {destination} ({origin})");
        }
    }

    Ok(())
}

fn print_record(record: &TrackingRecord) {
    let progress = record.status.progress();
    println!("Tracking:    {}", record.tracking);
    println!("Status:      {} [{}]", record.status.display, record.status.tone().as_str());
    println!(
        "Progress:    booked {} / in transit {} / delivered {}",
        mark(progress.booked),
        mark(progress.in_transit),
        mark(progress.delivered)
    );
    println!("Route:       {} -> {}", record.route.origin, record.route.destination);
    println!("Sent:        {}", record.dates.sending);
    println!("Estimated:   {}", record.dates.estimated);
    if let Some(actual) = &record.dates.actual {
        println!("Delivered:   {actual}");
    }
    if let Some(name) = &record.sender.name {
        println!("Sender:      {name}");
    }
    if let Some(name) = &record.recipient.name {
        println!("Recipient:   {name}");
    }
    if let Some(weight) = record.commodity.weight {
        println!("Weight:      {weight} kg");
    }
    if let Some(description) = &record.commodity.description {
        println!("Contents:    {description}");
    }

    let i = &record.interventions;
    for (active, label) in [
        (i.customs_active, "Customs hold active"),
        (i.security_active, "Security check active"),
        (i.damage_reported, "Damage reported"),
        (i.delay_active, "Delivery delayed"),
    ] {
        if active {
            println!("!            {label}");
        }
    }

    if !record.timeline.is_empty() {
        println!();
        println!("Timeline:");
        for event in &record.timeline {
            match &event.location {
                Some(location) => println!("  {}  {} ({location})", event.timestamp, event.display),
                None => println!("  {}  {}", event.timestamp, event.display),
            }
        }
    }
}

fn mark(done: bool) -> &'static str {
    if done { "[x]" } else { "[ ]" }
}
