use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixel_gate::config::load_config;
use pixel_gate::decision::{PageOverride, RouteAuthorizer};
use pixel_gate::pattern::{glob_to_regex, try_compile};
use pixel_gate::tracker::{NavigationTracker, TrackAction};

#[derive(Parser)]
#[command(name = "pixel-cli")]
#[command(about = "Inspect route tracking decisions for a pixel configuration", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "pixel.toml")]
    config: PathBuf,

    /// Show route decisions as they are made
    #[arg(long)]
    debug: bool,

    /// Emit machine-readable JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide whether a path would be tracked (exits 1 when suppressed)
    Check {
        /// Navigation path to test
        path: String,

        /// Page-level override: true forces tracking, false suppresses it
        #[arg(long)]
        page_override: Option<bool>,
    },
    /// Show the matcher a glob route pattern compiles to
    Explain {
        /// Glob route pattern
        pattern: String,
    },
    /// Replay a navigation sequence through a fresh tracking session
    Simulate {
        /// Navigation paths, in order
        paths: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.debug {
        "pixel_gate=debug"
    } else {
        "pixel_gate=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Check {
            path,
            page_override,
        } => {
            let config = load_config(&cli.config)?;
            let authorizer = RouteAuthorizer::new(&config.routes);
            let (allowed, rule) = authorizer.evaluate(&path, PageOverride::from(page_override));

            if cli.json {
                print_json(&json!({
                    "path": path,
                    "allowed": allowed,
                    "rule": rule,
                }))?;
            } else if allowed {
                println!("tracking allowed for {path} ({rule})");
            } else {
                println!("tracking suppressed for {path} ({rule})");
            }

            if !allowed {
                std::process::exit(1);
            }
        }
        Commands::Explain { pattern } => {
            let rule = glob_to_regex(&pattern);
            let error = try_compile(&pattern).err();

            if cli.json {
                print_json(&json!({
                    "pattern": pattern,
                    "rule": rule,
                    "matchable": error.is_none(),
                    "error": error.map(|e| e.to_string()),
                }))?;
            } else {
                println!("pattern: {pattern}");
                println!("rule:    {rule}");
                if let Some(error) = error {
                    println!("error:   {error}");
                    println!("note:    rule is invalid and will never match");
                }
            }
        }
        Commands::Simulate { paths } => {
            let config = load_config(&cli.config)?;
            let mut tracker = NavigationTracker::new(config);
            let mut steps = Vec::new();

            for path in &paths {
                let action = tracker.on_navigation(path, PageOverride::Unspecified);

                if cli.json {
                    steps.push(match &action {
                        Some(TrackAction::Initialize { pixel_ids }) => json!({
                            "path": path,
                            "action": "initialize",
                            "pixel_ids": pixel_ids,
                        }),
                        Some(TrackAction::PageView) => json!({
                            "path": path,
                            "action": "page_view",
                        }),
                        None => json!({
                            "path": path,
                            "action": null,
                        }),
                    });
                } else {
                    match action {
                        Some(TrackAction::Initialize { pixel_ids }) => {
                            println!("{path} -> initialize pixels {}", pixel_ids.join(", "));
                        }
                        Some(TrackAction::PageView) => println!("{path} -> page view"),
                        None => println!("{path} -> no action"),
                    }
                }
            }

            if cli.json {
                print_json(&json!({ "steps": steps }))?;
            }
        }
    }

    Ok(())
}

fn print_json(value: &serde_json::Value) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
