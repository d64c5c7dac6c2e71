use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "minerapp.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_SESSION_SECRET: &str = "SESSION_SECRET";
const ENV_NAME_UPLOAD_DIR: &str = "UPLOAD_DIR";

/// Minimum number of bytes of the key material for session cookies.
pub const MIN_SESSION_SECRET_LEN: usize = 32;

const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_MAX_FILES: usize = 5;
const DEFAULT_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;
const DEFAULT_SESSION_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub uploads: Uploads,
    pub session: Session,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env_overrides(|name| env::var(name).ok())?;
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(db_url) = var(ENV_NAME_DB_URL) {
            self.db.conn_sqlite = db_url;
        }
        if let Some(dir) = var(ENV_NAME_UPLOAD_DIR) {
            self.uploads.dir = dir.into();
        }
        if let Some(secret) = var(ENV_NAME_SESSION_SECRET) {
            if secret.len() < MIN_SESSION_SECRET_LEN {
                return Err(anyhow!(
                    "{ENV_NAME_SESSION_SECRET} must contain at least {MIN_SESSION_SECRET_LEN} bytes"
                ));
            }
            self.session.secret = Some(secret);
        }
        Ok(())
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
}

pub struct Uploads {
    /// Flat file system directory of the uploaded images
    pub dir: PathBuf,
    /// Maximum number of images per request
    pub max_files: usize,
    /// Maximum size of a single image in bytes
    pub max_file_size: u64,
}

pub struct Session {
    pub max_age: Duration,
    /// Key material for the session cookies, replaces
    /// the secret key of Rocket if present.
    pub secret: Option<String>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            uploads,
            session,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();
        if connection_pool_size == 0 {
            return Err(anyhow!("The database connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer { cors } = webserver.unwrap_or_default();
        let webserver = WebServer { enable_cors: cors };

        let raw::Uploads {
            dir,
            max_files,
            max_file_size,
        } = uploads.unwrap_or_default();
        let uploads = Uploads {
            dir: dir.unwrap_or_else(|| DEFAULT_UPLOAD_DIR.into()),
            max_files: max_files.unwrap_or(DEFAULT_MAX_FILES),
            max_file_size: max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE),
        };
        if uploads.max_file_size == 0 {
            return Err(anyhow!("The maximum file size must be positive"));
        }

        let raw::Session { max_age } = session.unwrap_or_default();
        let session = Session {
            max_age: max_age.unwrap_or(DEFAULT_SESSION_MAX_AGE),
            secret: None,
        };

        Ok(Self {
            db,
            webserver,
            uploads,
            session,
        })
    }
}
