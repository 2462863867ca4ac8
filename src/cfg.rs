use std::{env, net::SocketAddr};

const DEFAULT_DB_URL: &str = "tourdb.db";
const DB_CONNECTION_POOL_SIZE: u32 = 10;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub db_url: String,
    pub db_connection_pool_size: u32,
    pub bind: Option<SocketAddr>,
    pub token_secret: Option<String>,
}

impl Cfg {
    pub fn from_env_or_default() -> Self {
        let mut cfg = Self::default();
        if let Ok(db_url) = env::var("DATABASE_URL") {
            cfg.db_url = db_url;
        }
        if let Ok(bind) = env::var("BIND") {
            match bind.parse() {
                Ok(addr) => {
                    cfg.bind = Some(addr);
                }
                Err(err) => {
                    log::warn!("Ignoring invalid BIND address '{bind}': {err}");
                }
            }
        }
        match env::var("JWT_SECRET") {
            Ok(secret) => {
                cfg.token_secret = Some(secret);
            }
            Err(_) => {
                log::warn!("No JWT secret found, tokens expire on restart");
            }
        }
        cfg
    }
}

impl Default for Cfg {
    fn default() -> Self {
        let db_url = DEFAULT_DB_URL.to_string();
        let db_connection_pool_size = DB_CONNECTION_POOL_SIZE;
        Self {
            db_url,
            db_connection_pool_size,
            bind: None,
            token_secret: None,
        }
    }
}
