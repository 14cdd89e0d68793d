mod server;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use server::{inspect_datagram, DnsInspector};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dns-inspect", about = "Print the header and first question of DNS messages")]
struct Args {
    /// UDP address to listen on
    #[arg(long, default_value = "127.0.0.1:2053")]
    bind: String,

    /// Receive buffer size in bytes
    #[arg(long, default_value_t = 512)]
    max_datagram: usize,

    /// Decode one raw message from this file instead of listening
    #[arg(long)]
    file: Option<PathBuf>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = &args.file {
        let buf = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        info!(path = %path.display(), size = buf.len(), "decoding message from file");

        let rendered = inspect_datagram(&buf)
            .with_context(|| format!("Failed to decode {}", path.display()))?;
        println!("{}", rendered);
        return Ok(());
    }

    let server = DnsInspector::new(&args.bind, args.max_datagram)?;
    server.run()
}
