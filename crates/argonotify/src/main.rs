use clap::Parser;
use tokio::runtime::Runtime;
use tracing::info;
use tracing_subscriber::EnvFilter;

use argonotify::cli::{Cli, Commands};
use argonotify::config::Config;
use argonotify::duration;
use argonotify::message::build_embeds;
use argonotify::payload::{dump_payload, Payload};
use argonotify::sink::post_webhook;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let rt = Runtime::new()?;
    rt.block_on(async {
        match cli.command {
            Commands::Send(args) => {
                let config = Config::from_args(args)?;

                let duration_text = match config.duration_secs {
                    Some(secs) => duration::humanize(secs),
                    None => duration::UNKNOWN.to_string(),
                };

                let embeds = build_embeds(&config, &duration_text);
                let body = Payload::new(embeds).encode()?;

                if let Some(path) = &config.payload_file {
                    dump_payload(path, &body);
                }

                post_webhook(&config.webhook_url, body).await?;
                info!(
                    "Delivered notification for workflow {}/{} ({})",
                    config.namespace, config.name, config.status
                );
            }
            Commands::Version { json } => {
                if json {
                    let info = serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "commit": option_env!("GIT_SHA").unwrap_or("unknown"),
                        "build_date": option_env!("BUILD_DATE").unwrap_or("unknown"),
                    });
                    println!("{}", serde_json::to_string_pretty(&info)?);
                } else {
                    println!(
                        "argonotify {} (commit: {}, built: {})",
                        env!("CARGO_PKG_VERSION"),
                        option_env!("GIT_SHA").unwrap_or("unknown"),
                        option_env!("BUILD_DATE").unwrap_or("unknown"),
                    );
                }
            }
        }
        Ok(())
    })
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
