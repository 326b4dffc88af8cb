use quizflow::{app::App, config::FlowConfig, error, Result};

#[tokio::main]
async fn main() {
    // Logs go to stderr and stay silent unless RUST_LOG is set
    let _ = pretty_env_logger::try_init();

    if let Err(e) = run().await {
        eprintln!("{}", error::user_friendly_message(&e));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--init-config") {
        let path = FlowConfig::default().save()?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let config = FlowConfig::load()?;
    log::info!(
        "starting with welcome delay {:?}, feedback delay {:?}",
        config.welcome_delay,
        config.feedback_delay
    );

    let mut app = App::new(config)?;
    app.init()?;
    let result = app.run().await;
    app.restore()?;
    result
}
