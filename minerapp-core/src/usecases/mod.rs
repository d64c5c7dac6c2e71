mod admin_auth;
mod create_new_place;
mod delete_place;
mod error;
mod favorites;
mod get_place;
mod manage_categories;
mod moderate_reviews;
mod query_places;
mod query_reviews;
mod submit_review;
mod update_place;
mod user_auth;

#[cfg(test)]
pub mod tests;

pub use self::{
    admin_auth::*, create_new_place::*, delete_place::*, error::Error, favorites::*,
    get_place::*, manage_categories::*, moderate_reviews::*, query_places::*, query_reviews::*,
    submit_review::*, update_place::*, user_auth::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub(super) use super::NotFoundExt;
    pub use crate::{entities::*, repositories::*};
}

trait NotFoundExt<T> {
    /// Replaces a missing record by a more specific error.
    fn or_not_found(self, err: Error) -> std::result::Result<T, Error>;
}

impl<T> NotFoundExt<T> for std::result::Result<T, crate::repositories::Error> {
    fn or_not_found(self, err: Error) -> std::result::Result<T, Error> {
        self.map_err(|e| match e {
            crate::repositories::Error::NotFound => err,
            e => Error::Repo(e),
        })
    }
}
