#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # minerapp-entities
//!
//! Reusable, agnostic domain entities for MinerApp.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod admin;
pub mod category;
pub mod email;
pub mod favorite;
pub mod id;
pub mod location;
pub mod password;
pub mod place;
pub mod rating;
pub mod review;
pub mod time;
pub mod user;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
