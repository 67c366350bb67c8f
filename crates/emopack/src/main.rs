mod cli;
mod prompt;

use clap::Parser;
use eyre::WrapErr;

use emopack_core::api::HttpEmoteClient;
use emopack_core::{harvest, output, CoreError, HarvestReport};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    let config = args.harvest_config();
    config.validate().context("check startup options")?;

    // The credential is checked before any network call is made.
    let credential = prompt::prompt_credential().context("read SESSDATA")?;

    let client = HttpEmoteClient::new(&config).context("build HTTP client")?;

    let report = harvest::run(&client, &credential, &config)
        .await
        .map_err(|err| {
            let context = match &err {
                CoreError::NotAuthenticated { .. } => "panel login check failed",
                CoreError::MissingField(_) => "unexpected panel data structure",
                _ => "could not fetch emote panel data",
            };
            eyre::Report::new(err).wrap_err(context)
        })?;

    tracing::info!(path = %args.output.display(), "[4/4] writing emoji document");
    output::write_document(&args.output, &report.document)
        .with_context(|| format!("write output file `{}`", args.output.display()))?;

    print_summary(&report, config.skip_empty_packages, &args.output);
    Ok(())
}

fn print_summary(report: &HarvestReport, skip_empty: bool, path: &std::path::Path) {
    let stats = &report.stats;

    println!();
    println!("  emopack finished:");
    println!("    Panel packages:    {}", report.panel_packages);
    println!("    Details fetched:   {}", report.fetched_details);
    println!(
        "    Detail batches:    {} ({} failed)",
        report.batches, report.failed_batches
    );
    println!("    Merged packages:   {}", stats.merged);
    if skip_empty {
        println!("    Skipped (empty):   {}", stats.empty);
    } else {
        println!("    Empty but kept:    {}", stats.empty);
    }
    println!("    Missing details:   {}", stats.missing_fetch);
    println!("    Output:            {}", path.display());
    println!();
}
