#[macro_use]
extern crate log;

mod cfg;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use tourdb_webserver as webserver;

#[derive(Debug, Parser)]
#[command(version, about = "Tourism backend with a RESTful API")]
struct Args {
    /// SQLite database file
    #[arg(long = "db-url")]
    db_url: Option<String>,

    /// Socket address the web server listens on
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Secret used to sign JWT access tokens
    #[arg(long = "token-secret")]
    token_secret: Option<String>,
}

fn connect_to_db(db_url: &str, pool_size: u32) -> Result<tourdb_db_sqlite::Connections> {
    info!("Connecting to SQLite database '{db_url}' (pool size {pool_size})");
    tourdb_db_sqlite::Connections::init(db_url, pool_size)
        .context("Unable to connect to database")
}

fn update_db(connections: &tourdb_db_sqlite::Connections) -> Result<()> {
    info!("Updating database schema");
    let conn = connections.exclusive()?;
    tourdb_db_sqlite::run_embedded_database_migrations(conn);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let mut cfg = cfg::Cfg::from_env_or_default();
    let args = Args::parse();
    if let Some(db_url) = args.db_url {
        cfg.db_url = db_url;
    }
    if let Some(bind) = args.bind {
        cfg.bind = Some(bind);
    }
    if let Some(token_secret) = args.token_secret {
        cfg.token_secret = Some(token_secret);
    }

    let connections = connect_to_db(&cfg.db_url, cfg.db_connection_pool_size)?;
    update_db(&connections)?;

    let web_cfg = webserver::Cfg {
        bind: cfg.bind,
        token_secret: cfg.token_secret,
    };
    webserver::run(connections, web_cfg).await;
    Ok(())
}
