//! Print a usage summary and the remaining balances for one project.
//!
//! Run with: DEEPGRAM_API_KEY=... cargo run --example usage_report -- <project_id>

use deepgram_manage::{Deepgram, UsageOptions};

#[tokio::main]
async fn main() -> deepgram_manage::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let project_id = std::env::args()
        .nth(1)
        .expect("usage: usage_report <project_id>");

    let deepgram = Deepgram::builder().build()?;
    let project = deepgram.project(&project_id).await?;

    let summary = project.usage(&UsageOptions::default()).await?;
    println!(
        "usage {} .. {} ({} buckets)",
        summary.start,
        summary.end,
        summary.results.len()
    );
    for bucket in &summary.results {
        println!(
            "  {}  hours={:?} requests={:?}",
            bucket.start, bucket.hours, bucket.requests
        );
    }

    for balance in project.balances().await? {
        println!("balance {}  {} {}", balance.balance_id, balance.amount, balance.units);
    }

    Ok(())
}
