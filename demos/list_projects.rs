//! List every project the configured API key can see, with its keys.
//!
//! Run with: DEEPGRAM_API_KEY=... cargo run --example list_projects

use deepgram_manage::Deepgram;

#[tokio::main]
async fn main() -> deepgram_manage::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let deepgram = Deepgram::builder().build()?;

    for project in deepgram.projects().await? {
        println!("{}  {}", project.project_id, project.name);
        for key in project.keys().await? {
            println!("    key {}  {}", key.api_key_id, key.comment);
        }
    }

    Ok(())
}
