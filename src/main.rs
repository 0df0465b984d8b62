use clap::Parser;

use docroot::config::CliArgs;
use docroot::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let args = CliArgs::parse();
    let cfg = args.resolve(|key| std::env::var(key).ok())?;

    tracing::info!("Starting server on {}..", cfg.listen_addr());

    tokio::select! {
        res = server::listener::run(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::error!("[!] Keyboard Interrupted!");
        }
    }

    // The listener was dropped with the select; in-flight connections are not drained
    tracing::info!("Server has stopped");
    Ok(())
}
