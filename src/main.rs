use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lite3_bridge::config::{DEFAULT_LISTEN_PORT, DEFAULT_MOTION_ADDR};

/// Voice-to-motion bridge for the Lite3 quadruped
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// UDP port to receive voice commands on
    #[arg(long, default_value_t = DEFAULT_LISTEN_PORT)]
    listen_port: u16,

    /// Motion controller address (ip:port)
    #[arg(long, default_value = DEFAULT_MOTION_ADDR)]
    motion_addr: SocketAddr,
}

#[tokio::main]
async fn main() {
    // Setup logging (set RUST_LOG=info or debug)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init(); // installs the subscriber globally

    let args = Args::parse();
    let listen = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), args.listen_port);

    if let Err(e) = lite3_bridge::runtime::run(listen, args.motion_addr).await {
        eprintln!("Bridge error: {}", e);
        std::process::exit(1);
    }
}
