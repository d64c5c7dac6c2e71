// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified by another repository.

use crate::{
    entities::*,
    util::query::{PlaceQuery, ReviewQuery},
};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

pub trait PlaceRepo {
    fn create_place(&self, place: &Place) -> Result<()>;
    fn update_place(&self, place: &Place) -> Result<()>;
    fn delete_place(&self, id: &str) -> Result<()>;

    fn get_place(&self, id: &str) -> Result<Place>;
    fn get_places(&self, ids: &[&str]) -> Result<Vec<Place>>;

    fn query_places(&self, query: &PlaceQuery, pagination: &Pagination) -> Result<Vec<Place>>;
    fn count_places(&self, query: &PlaceQuery) -> Result<u64>;

    fn increment_place_visits(&self, id: &str) -> Result<()>;
    // The counter never drops below zero.
    fn add_place_likes(&self, id: &str, delta: i64) -> Result<()>;

    // Ordered by name
    fn list_place_refs(&self, pagination: &Pagination) -> Result<Vec<PlaceRef>>;
}

pub trait CategoryRepo {
    fn create_category(&self, category: &Category) -> Result<()>;
    fn update_category(&self, category: &Category) -> Result<()>;
    fn delete_category(&self, id: &str) -> Result<()>;

    fn get_category(&self, id: &str) -> Result<Category>;
    // Ordered by name
    fn all_categories(&self) -> Result<Vec<Category>>;
}

pub trait AdminRepo {
    fn create_admin(&self, admin: &Admin) -> Result<()>;

    fn get_admin(&self, id: &str) -> Result<Admin>;
    fn try_get_admin_by_username(&self, username: &str) -> Result<Option<Admin>>;
    fn try_get_admin_by_email(&self, email: &EmailAddress) -> Result<Option<Admin>>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;

    // Ordered by name
    fn list_user_refs(&self, pagination: &Pagination) -> Result<Vec<UserRef>>;
}

pub trait ReviewRepo {
    fn create_review(&self, review: &Review) -> Result<()>;
    fn update_review(&self, review: &Review) -> Result<()>;
    fn delete_review(&self, id: &str) -> Result<()>;

    fn get_review(&self, id: &str) -> Result<Review>;
    fn try_get_review_of_user_and_place(
        &self,
        user_id: &str,
        place_id: &str,
    ) -> Result<Option<Review>>;

    fn query_reviews(
        &self,
        query: &ReviewQuery,
        pagination: &Pagination,
    ) -> Result<Vec<ReviewWithRefs>>;
    fn count_reviews(&self, query: &ReviewQuery) -> Result<u64>;
    // Sorted by rating in descending order, ratings without reviews are omitted.
    fn summarize_review_ratings(&self, query: &ReviewQuery) -> Result<Vec<RatingCount>>;
}

pub trait FavoriteRepo {
    fn create_favorite(&self, favorite: &Favorite) -> Result<()>;
    // Ok(false) if there was nothing to delete
    fn delete_favorite(&self, user_id: &str, place_id: &str) -> Result<bool>;

    fn try_get_favorite(&self, user_id: &str, place_id: &str) -> Result<Option<Favorite>>;
    // Most recent first
    fn favorite_place_ids_of_user(&self, user_id: &str) -> Result<Vec<Id>>;

    fn summarize_favorites(
        &self,
        place_ids: &[&str],
        viewer_id: Option<&str>,
    ) -> Result<Vec<(Id, FavoriteSummary)>>;
}
