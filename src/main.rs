use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;
use api::serve;
use repository::init_repository;
use tokio::net::TcpListener;
use util::load_env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let secrets = load_env()?;
    let conn_string = secrets
        .get("DATABASE_URL")
        .and_then(|v| v.as_str())
        .context("DATABASE_URL was not found in Secrets.toml")?;

    let repository = init_repository(conn_string).await?;

    let router = serve(repository).await?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8000));
    let listener = TcpListener::bind(&address).await?;
    Ok(axum::serve(listener, router.into_make_service()).await?)
}
