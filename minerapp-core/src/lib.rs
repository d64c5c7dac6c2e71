//! # minerapp-core
//!
//! Repository traits, gateways and use cases of MinerApp.
//! Everything in here is independent of the storage backend
//! and of the web framework.

pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use minerapp_entities::{
        admin::*, category::*, email::*, favorite::*, id::*, location::*, password::*, place::*,
        rating::*, review::*, time::*, url::Url, user::*,
    };
}
