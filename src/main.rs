use anyhow::Context;
use mailsort::channels::JsonMailbox;
use mailsort::config::CliConfig;
use mailsort::pipeline::processor::TriageProcessor;
use mailsort::pipeline::types::{CategoryTally, sender_display_name};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: mailsort <mailbox.json>")?;
    let config = CliConfig::from_env()?;

    eprintln!("mailsort v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Mailbox: {path}");
    eprintln!("   Fetch limit: {}\n", config.fetch_limit);

    let source = JsonMailbox::new(&path);
    let processor = TriageProcessor::new();
    let classified = processor
        .run(&source, config.fetch_limit)
        .await
        .with_context(|| format!("failed to triage mailbox {path}"))?;

    for message in &classified {
        println!(
            "{}\t{}\t{}",
            message.category,
            sender_display_name(&message.email.sender),
            message.email.subject
        );
    }

    let tally: CategoryTally = classified.iter().map(|m| m.category).collect();
    println!(
        "\ntotal {}: {} urgent, {} important, {} other",
        tally.total(),
        tally.urgent,
        tally.important,
        tally.other
    );

    Ok(())
}
