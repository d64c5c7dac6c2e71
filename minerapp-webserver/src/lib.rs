#![allow(proc_macro_derive_resolution_fallback)]
#![recursion_limit = "128"]

#[macro_use]
extern crate log;

use minerapp_core::gateways::images::ImageStore;
use minerapp_db_sqlite::Connections;

mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    images: Box<dyn ImageStore + Send + Sync>,
    enable_cors: bool,
    cfg: Cfg,
) {
    web::run(connections, images, enable_cors, cfg).await;
}
