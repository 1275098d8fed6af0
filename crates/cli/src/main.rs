//! Sitetime CLI - renders the "current local time" widget for a site

mod logging;
mod wiring;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use sitetime_core::domain::SiteId;
use sitetime_core::port::{PresentationSink, Translator};
use sitetime_infra_config::{JsonPresentationSink, TextPresentationSink, WidgetSettings};
use std::path::PathBuf;
use std::sync::Arc;
use tabled::{Table, Tabled};
use tracing::debug;

#[derive(Parser)]
#[command(name = "sitetime")]
#[command(about = "Current local time of an analytics site", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Settings file (TOML)
    #[arg(long, env = "SITETIME_CONFIG", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the widget (default)
    Render {
        /// Site id; falls back to the default site when absent or not an integer
        #[arg(long = "id-site", allow_hyphen_values = true)]
        id_site: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Viewer timezone for the "local" line of the text output
        #[arg(long)]
        viewer_tz: Option<String>,
    },

    /// Show widget registration
    Widget,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Tabled)]
struct WidgetRow {
    field: &'static str,
    value: String,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init_logging()?;

    let cli = Cli::parse();
    let settings = WidgetSettings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command.unwrap_or(Commands::Render {
        id_site: None,
        format: OutputFormat::Text,
        viewer_tz: None,
    }) {
        Commands::Render {
            id_site,
            format,
            viewer_tz,
        } => {
            let requested = SiteId::from_request_param(id_site.as_deref());
            debug!(?requested, "Rendering widget");

            let sink: Arc<dyn PresentationSink> = match format {
                OutputFormat::Json => Arc::new(JsonPresentationSink),
                OutputFormat::Text => Arc::new(TextPresentationSink::new(parse_viewer(viewer_tz)?)),
            };

            let service = wiring::build_service(&settings, sink)?;
            let rendered = service.render(requested)?;
            println!("{}", rendered);
        }

        Commands::Widget => {
            let config = settings.widget_config();
            let translator = wiring::translator(&settings)?;

            println!("{}", translator.translate(&config.name).cyan().bold());
            println!();

            let rows = vec![
                WidgetRow {
                    field: "category",
                    value: config.category_id.clone(),
                },
                WidgetRow {
                    field: "subcategory",
                    value: config.subcategory_id.clone().unwrap_or_else(|| "-".to_string()),
                },
                WidgetRow {
                    field: "name",
                    value: config.name.clone(),
                },
                WidgetRow {
                    field: "order",
                    value: config.order.to_string(),
                },
                WidgetRow {
                    field: "enabled",
                    value: config.enabled.to_string(),
                },
                WidgetRow {
                    field: "visible",
                    value: config.is_visible().to_string(),
                },
            ];
            println!("{}", Table::new(rows));
        }
    }

    Ok(())
}

fn parse_viewer(viewer_tz: Option<String>) -> Result<Option<Tz>> {
    viewer_tz
        .map(|name| {
            name.parse::<Tz>()
                .map_err(|_| anyhow::anyhow!("Invalid viewer timezone: {}", name))
        })
        .transpose()
}
