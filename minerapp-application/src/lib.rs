#[macro_use]
extern crate log;

mod create_place;
mod delete_place;
mod favorites;
mod images;
mod reviews;
mod update_place;

pub mod prelude {
    pub use super::{
        create_place::*, delete_place::*, favorites::*, images::*, reviews::*, update_place::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use minerapp_core::{entities::*, gateways::images::ImageStore, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use minerapp_db_sqlite::Connections;
}
