//! # tourdb-webserver
//!
//! The JSON API of the tourdb backend, built on Rocket.

#[macro_use]
extern crate log;

mod adapters;
mod web;

pub use web::Cfg;

pub async fn run(connections: tourdb_db_sqlite::Connections, cfg: Cfg) {
    web::run(connections, cfg).await;
}
