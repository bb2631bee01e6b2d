use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_client::config::Config;
use resume_client::controller::ResumeController;
use resume_client::fetch::{RetryingFetcher, TracingSink};
use resume_client::models::RequestState;
use resume_client::render::render_state;

const PROMPT: &str = "\nPress Enter to generate a new resume, or type q to quit.";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("resume_client={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume client v{}", env!("CARGO_PKG_VERSION"));
    info!("Resume service: {}", config.api_url);

    let fetcher = RetryingFetcher::new(&config.api_url);
    let mut controller = ResumeController::new(fetcher);
    let sink = TracingSink;

    // The initial load needs no user action, same as opening the page.
    run_cycle(&mut controller, &sink).await;
    println!("{PROMPT}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "q" | "quit" => break,
            "" | "r" => {
                run_cycle(&mut controller, &sink).await;
                println!("{PROMPT}");
            }
            other => {
                println!("Unrecognized input '{other}'. Press Enter to regenerate or q to quit.");
            }
        }
    }

    Ok(())
}

/// One trigger: show the loading text, await the terminal outcome, render it.
async fn run_cycle(controller: &mut ResumeController, sink: &TracingSink) {
    println!("{}", render_state(&RequestState::Loading));
    controller.trigger(sink).await;
    println!("\n{}", render_state(controller.state()));
}
