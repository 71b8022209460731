use std::time::Instant;

use anyhow::Result;
use tokio::sync::watch;

use quote_audit::analyzer;
use quote_audit::capture::CaptureOutcome;
use quote_audit::config::Config;
use quote_audit::feed::ws::FeedWsClient;
use quote_audit::report;
use quote_audit::verdict;

#[tokio::main]
async fn main() -> Result<()> {
    // Install rustls crypto provider (required by rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {:#}", e);
            std::process::exit(1);
        }
    };

    // Logs go to stderr so the report on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                config
                    .logging
                    .level
                    .parse()
                    .unwrap_or_else(|_| "info".parse().unwrap())
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = config.capture.settings();
    tracing::info!(
        url = %config.stream.ws_url,
        ticks_per_symbol = settings.ticks_per_symbol,
        deadline_secs = settings.session_deadline.as_secs(),
        "starting quote audit"
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    let client = FeedWsClient::new(&config.stream.ws_url);
    let started = Instant::now();

    let buffer = match client.capture(&settings, shutdown_rx).await? {
        CaptureOutcome::Interrupted => {
            tracing::warn!("audit interrupted by user, no verdict produced");
            return Ok(());
        }
        CaptureOutcome::Complete(buffer) => buffer,
    };

    let analysis = analyzer::run(&buffer);
    let verdict = verdict::decide(&analysis.verdict_input());
    tracing::info!(%verdict, "analysis complete");

    print!("{}", report::render(&buffer, &analysis, verdict, started.elapsed()));
    Ok(())
}
