use ailab::player::SilentPlayback;
use ailab::{App, Config};
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ailab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Display mode for this session (light|dark), not persisted
    #[arg(long)]
    mode: Option<String>,

    /// Color theme for this session (purple|neon|cyberpunk), not persisted
    #[arg(long)]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ailab=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let mut config = Config::load();

    // Session-only overrides; unrecognized values fall back to the defaults
    // the same way unrecognized persisted values do
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    let mut app = App::new(config, Box::new(SilentPlayback))?;
    app.run().await?;

    Ok(())
}
