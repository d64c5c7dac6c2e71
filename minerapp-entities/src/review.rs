use crate::{id::*, place::PlaceRef, rating::*, time::*, user::UserRef};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id         : Id,
    pub user_id    : Id,
    pub place_id   : Id,
    pub rating     : RatingValue,
    pub comment    : Option<String>,
    pub created_at : Timestamp,
    pub updated_at : Timestamp,
}

impl Review {
    pub const MAX_COMMENT_LEN: usize = 1000;
}

/// A review joined with its author and place.
///
/// Both references are optional because either record
/// may be gone by the time the review is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewWithRefs {
    pub review: Review,
    pub user: Option<UserRef>,
    pub place: Option<PlaceRef>,
}

/// Number of reviews per rating value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingCount {
    pub rating: RatingValue,
    pub count: u64,
}
