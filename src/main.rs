use std::{io, sync::Arc};

use log::info;
use regress_engine::evaluation::RegressionEngine;
use regress_engine::server::{self, ServerConfig};
use tokio::{net::TcpListener, signal};

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let config = ServerConfig::from_env().map_err(io::Error::other)?;
    let engine = Arc::new(RegressionEngine::default());

    let listener = TcpListener::bind(config.addr()).await?;
    info!("listening at {}", listener.local_addr()?);

    tokio::select! {
        _ = server::serve(listener, engine) => {}
        _ = signal::ctrl_c() => {
            info!("received SIGINT, shutting down");
        }
    }

    Ok(())
}
