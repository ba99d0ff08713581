use clap::Args;
use mindset_core::Config;
use tracing::info;

use crate::web::{self, AppState};

#[derive(Args)]
pub struct ServeArgs {
    /// Bind host (default from server.host)
    #[arg(long)]
    host: Option<String>,
    /// Bind port (default from server.port)
    #[arg(long)]
    port: Option<u16>,
}

pub fn run(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    let bind = config.bind_address();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let app = web::router(AppState::new(&config));
        let listener = tokio::net::TcpListener::bind(&bind).await?;
        info!("listening on http://{}", listener.local_addr()?);
        axum::serve(listener, app).await?;
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
