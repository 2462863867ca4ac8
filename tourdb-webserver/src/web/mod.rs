use std::net::SocketAddr;

use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;
pub mod jwt;
mod sqlite;


#[derive(Debug, Clone, Default)]
pub struct Cfg {
    /// The socket address to listen on.
    ///
    /// Falls back to Rocket's own configuration if omitted.
    pub bind: Option<SocketAddr>,

    /// Key for signing bearer tokens.
    ///
    /// A random key is generated if omitted, which invalidates
    /// all issued tokens on restart.
    pub token_secret: Option<String>,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;

    let jwt_state = jwt::JwtState::new(cfg.token_secret.as_deref());

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r.manage(db).manage(jwt_state);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(connections: tourdb_db_sqlite::Connections, cfg: Cfg) {
    let rocket_cfg = cfg.bind.map(|addr| {
        let mut rocket_cfg = RocketCfg::default();
        rocket_cfg.address = addr.ip();
        rocket_cfg.port = addr.port();
        rocket_cfg
    });
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg,
        cfg,
    };
    let instance = rocket_instance(options, connections.into());
    if let Err(err) = instance.launch().await {
        log::error!("Unable to run web server: {err}");
    }
}
