use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use anex_core::{Language, Originator, Platform};
use anex_export::{ExportOutcome, ExportRequest, Exporter};
use anex_report::SheetRequestFlags;

#[derive(Debug, Parser)]
#[command(name = "anex")]
#[command(about = "Social media analytics report exporter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch a creator's analytics, build the report and upload it.
    Export {
        /// Platform tag: instagram or tiktok.
        #[arg(long)]
        platform: String,

        /// Report language tag: en or es.
        #[arg(long, default_value = "en")]
        language: String,

        /// Report originator tag: client or control.
        #[arg(long, default_value = "client")]
        originator: String,

        /// Creator's user id on the platform service.
        #[arg(long)]
        user_id: i64,

        /// Partnership content record to pull campaign metadata from.
        #[arg(long)]
        content_id: Option<i64>,

        /// Sheets to include, comma separated. Defaults to all of
        /// request,profile,metrics,audience,trends.
        #[arg(long, value_delimiter = ',')]
        sheets: Option<Vec<String>>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = anex_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Export {
            platform,
            language,
            originator,
            user_id,
            content_id,
            sheets,
        } => {
            let request = ExportRequest {
                platform: Platform::parse(&platform)?,
                language: Language::parse(&language)?,
                originator: Originator::parse(&originator)?,
                user_id,
                content_id,
                sheets: parse_sheets(sheets.as_deref())?,
            };

            let exporter = Exporter::from_config(&config).context("building clients")?;
            match exporter.run_export(&request).await? {
                ExportOutcome::Uploaded { url } => println!("{url}"),
                ExportOutcome::NoData => println!("no analytics data for user {user_id}"),
            }
        }
    }

    Ok(())
}

fn parse_sheets(names: Option<&[String]>) -> anyhow::Result<SheetRequestFlags> {
    let Some(names) = names else {
        return Ok(SheetRequestFlags::all());
    };

    let mut flags = SheetRequestFlags::none();
    for name in names {
        match name.trim().to_ascii_lowercase().as_str() {
            "request" => flags.request = true,
            "profile" => flags.profile = true,
            "metrics" => flags.metrics = true,
            "audience" => flags.audience = true,
            "trends" => flags.trends = true,
            other => bail!(
                "unknown sheet '{other}', expected one of request, profile, metrics, audience, trends"
            ),
        }
    }
    Ok(flags)
}
