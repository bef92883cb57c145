use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use visascraper::{fetch, pipeline};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) run every configuration ──────────────────────────────────
    let client = fetch::build_client()?;
    pipeline::run_all(&client);

    Ok(())
}
