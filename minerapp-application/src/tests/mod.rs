mod places;
mod reviews;

pub mod prelude {
    pub use minerapp_core::{
        entities::*,
        gateways::images::ImageStore,
        repositories::{Error as RepoError, *},
        usecases,
    };
    pub use minerapp_entities::builders::*;
    pub use minerapp_gateways::images::FsImageStore;

    pub mod sqlite {
        pub use crate::sqlite::*;
    }

    pub use crate::{error::*, prelude as flows};

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub image_store: FsImageStore,
        // Removed when dropped
        _upload_dir: tempfile::TempDir,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            minerapp_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            let upload_dir = tempfile::tempdir().unwrap();
            let image_store = FsImageStore::try_new(upload_dir.path()).unwrap();
            Self {
                db_connections,
                image_store,
                _upload_dir: upload_dir,
            }
        }

        /// Stores a dummy image file and returns its public path.
        pub fn store_image(&self) -> String {
            let slot = self.image_store.allocate(Some("png")).unwrap();
            std::fs::write(&slot.file_path, b"\x89PNG").unwrap();
            slot.public_path
        }

        pub fn image_exists(&self, public_path: &str) -> bool {
            let file_name = public_path.trim_start_matches("/uploads/");
            self.image_store.path().join(file_name).exists()
        }

        pub fn create_user(&self, name: &str) -> User {
            let user = User::build()
                .name(name)
                .email(&format!("{}@example.com", name.to_lowercase()))
                .password("secret")
                .finish();
            self.db_connections
                .exclusive()
                .unwrap()
                .create_user(&user)
                .unwrap();
            user
        }

        pub fn create_place(&self, name: &str) -> Place {
            flows::create_place(
                &self.db_connections,
                &self.image_store,
                usecases::NewPlace {
                    name: name.into(),
                    category: Some("Historia".into()),
                    ..Default::default()
                },
            )
            .unwrap()
        }

        pub fn get_place(&self, id: &str) -> Place {
            self.db_connections.shared().unwrap().get_place(id).unwrap()
        }
    }
}
