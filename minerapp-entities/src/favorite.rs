use crate::{id::Id, time::Timestamp};

/// A user's bookmark of a place.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id         : Id,
    pub user_id    : Id,
    pub place_id   : Id,
    pub created_at : Timestamp,
}

/// Favorite statistics of a single place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSummary {
    pub count: u64,
    /// Names of the most recent users, newest first.
    pub sample_users: Vec<String>,
    /// Whether the viewing user has favorited the place.
    pub is_favorite: bool,
}

impl FavoriteSummary {
    pub const MAX_SAMPLE_USERS: usize = 3;
}
