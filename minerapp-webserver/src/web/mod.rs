use std::{path::PathBuf, time::Duration};

use minerapp_core::gateways::images::ImageStore;
use minerapp_db_sqlite::Connections;
use rocket::{
    config::{Config as RocketCfg, SecretKey},
    data::{Limits, ToByteUnit},
    fs::{FileServer, Options},
    Rocket, Route,
};

mod admin;
mod api;
mod catchers;
#[cfg(feature = "frontend")]
mod frontend;
mod guards;
mod params;


#[derive(Debug, Clone)]
pub struct Cfg {
    pub upload_dir: PathBuf,
    pub max_images: usize,
    /// Maximum size of a single image in bytes
    pub max_image_size: u64,
    pub session_max_age: Duration,
    /// Key material for encrypting the session cookies,
    /// at least 32 bytes
    pub session_secret: Option<String>,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: RocketCfg,
    cfg: Cfg,
}

fn apply_cfg(rocket_cfg: &mut RocketCfg, cfg: &Cfg) {
    // All images of a single form plus the other fields
    let form_limit = cfg
        .max_image_size
        .saturating_mul(cfg.max_images as u64)
        .saturating_add(1024 * 1024);
    rocket_cfg.limits = Limits::default()
        .limit("file", cfg.max_image_size.bytes())
        .limit("data-form", form_limit.bytes());
    if let Some(secret) = &cfg.session_secret {
        rocket_cfg.secret_key = SecretKey::derive_from(secret.as_bytes());
    }
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: Connections,
    images: Box<dyn ImageStore + Send + Sync>,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        mut rocket_cfg,
        cfg,
    } = options;
    apply_cfg(&mut rocket_cfg, &cfg);

    let uploads = FileServer::new(&cfg.upload_dir, Options::Missing);
    let images = guards::Images(images);

    let mut instance = rocket::custom(rocket_cfg)
        .manage(db)
        .manage(images)
        .manage(cfg);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
        .mount("/uploads", uploads)
        .register("/", catchers::routes())
        .register("/admin", catchers::admin_routes())
}

#[cfg(not(feature = "frontend"))]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes()), ("/admin", admin::routes())]
}

#[cfg(feature = "frontend")]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![
        ("/api", api::routes()),
        ("/admin", admin::routes()),
        ("/admin", frontend::admin_routes()),
        ("/", frontend::routes()),
    ]
}

pub async fn run(
    db: Connections,
    images: Box<dyn ImageStore + Send + Sync>,
    enable_cors: bool,
    cfg: Cfg,
) {
    let rocket_cfg = match RocketCfg::figment().extract::<RocketCfg>() {
        Ok(rocket_cfg) => rocket_cfg,
        Err(err) => {
            error!("Invalid web server configuration: {err}");
            return;
        }
    };
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg,
        cfg,
    };
    let instance = rocket_instance(options, db, images);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Unable to enable CORS: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
