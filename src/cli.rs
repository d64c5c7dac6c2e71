use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use minerapp_db_sqlite::Connections;
use minerapp_gateways::images::FsImageStore;

use crate::config;

#[derive(Debug, Parser)]
#[command(name = "minerapp", version, about = "Places of mining heritage")]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

pub async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut cfg = config::Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }

    log::info!("Connecting to SQLite database {}", cfg.db.conn_sqlite);
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    minerapp_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let images = FsImageStore::try_new(&cfg.uploads.dir)?;
    log::info!("Storing uploaded images in {}", images.path().display());

    let web_cfg = minerapp_webserver::Cfg {
        upload_dir: images.path().to_path_buf(),
        max_images: cfg.uploads.max_files,
        max_image_size: cfg.uploads.max_file_size,
        session_max_age: cfg.session.max_age,
        session_secret: cfg.session.secret,
    };
    if web_cfg.session_secret.is_none() {
        log::warn!("No SESSION_SECRET configured, using the secret key of Rocket");
    }
    log::debug!(
        "Sessions expire after {} seconds",
        web_cfg.session_max_age.as_secs()
    );

    minerapp_webserver::run(
        connections,
        Box::new(images),
        cfg.webserver.enable_cors,
        web_cfg,
    )
    .await;
    Ok(())
}
