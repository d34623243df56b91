mod display;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use exoclass_core::{ClassFilter, ConfidenceSort, Session, ViewState};
use exoclass_inference::{Dataset, ENDPOINT_ENV, InferenceClient, InferenceConfig};
use tracing::Level;

#[derive(Parser)]
#[command(name = "exoclass", version, about = "Classify exoplanet candidates with a remote model")]
struct Cli {
    /// Inference service base URL (or full `/predict` URL).
    #[arg(long, env = ENDPOINT_ENV, global = true)]
    endpoint: Option<String>,

    /// Abort a request that takes longer than this many seconds.
    #[arg(long, env = "EXOCLASS_TIMEOUT_SECS", global = true)]
    timeout_secs: Option<u64>,

    /// Debug-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Upload a dataset and show the model's predictions.
    Predict(PredictArgs),
    /// Check that the inference service is reachable.
    Health,
}

#[derive(Args)]
struct PredictArgs {
    /// Dataset file to classify (forwarded as-is).
    file: PathBuf,

    /// Dataset column to use as each row's identifier.
    #[arg(long)]
    id_column: Option<String>,

    /// all, candidate or confirmed.
    #[arg(long, default_value = "all")]
    filter: ClassFilter,

    /// none, asc or desc (by confidence).
    #[arg(long, default_value = "none")]
    sort: ConfidenceSort,

    /// Show at most this many rows.
    #[arg(long)]
    limit: Option<usize>,

    /// Print the filtered predictions as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Save the filtered predictions as CSV.
    #[arg(long)]
    export: bool,

    /// Export every prediction regardless of --filter/--sort.
    #[arg(long, requires = "export")]
    export_unfiltered: bool,

    /// CSV file name; defaults to a timestamped name.
    #[arg(long, requires = "export")]
    export_name: Option<String>,

    /// Directory the CSV is written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("exoclass v{}", env!("CARGO_PKG_VERSION"));

    let client = InferenceClient::new(build_config(&cli)?)?;

    match cli.command {
        Command::Predict(args) => run_predict(&client, args).await,
        Command::Health => {
            client
                .health()
                .await
                .context("inference service health check failed")?;
            println!("inference service at {} is healthy", client.config().base_url);
            Ok(())
        }
    }
}

fn build_config(cli: &Cli) -> anyhow::Result<InferenceConfig> {
    let mut config = match &cli.endpoint {
        Some(url) => InferenceConfig::new(url.trim()),
        None => InferenceConfig::from_env()?,
    };
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}

async fn run_predict(client: &InferenceClient, args: PredictArgs) -> anyhow::Result<()> {
    let dataset = Dataset::from_path(&args.file).await?;
    eprintln!(
        "  Uploading {} ({} bytes) to {}",
        dataset.file_name,
        dataset.bytes.len(),
        client.config().endpoint()
    );

    let mut session = Session::new(ViewState::new(args.filter, args.sort));
    let outcome = client.submit(&dataset, args.id_column.as_deref()).await;
    let total = session
        .apply(outcome)
        .context("classification failed")?
        .total_samples;

    let view = session.view();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else if let Some(results) = session.current() {
        display::print_run_header(results, &session.summary());
        display::print_predictions(&view, total, &session.view, args.limit);
    }

    if args.export {
        let rows = if args.export_unfiltered {
            session
                .current()
                .map(|r| r.displayable().to_vec())
                .unwrap_or_default()
        } else {
            view
        };
        let path = exoclass_export::download(&rows, &args.out_dir, args.export_name.as_deref())
            .context("exporting predictions")?;
        eprintln!("  Wrote {} rows to {}", rows.len(), path.display());
    }

    Ok(())
}
