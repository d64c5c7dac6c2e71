use super::prelude::*;

pub const MAX_META_ENTRIES: u64 = 200;

/// Places and users to choose from when filtering reviews.
#[derive(Debug, Clone)]
pub struct ReviewMeta {
    pub places: Vec<PlaceRef>,
    pub users: Vec<UserRef>,
}

pub fn load_review_meta<R>(repo: &R) -> Result<ReviewMeta>
where
    R: PlaceRepo + UserRepo,
{
    let pagination = Pagination {
        offset: None,
        limit: Some(MAX_META_ENTRIES),
    };
    let places = repo.list_place_refs(&pagination)?;
    let users = repo.list_user_refs(&pagination)?;
    Ok(ReviewMeta { places, users })
}

/// Deletes any review, returning its id.
pub fn delete_review<R: ReviewRepo>(repo: &R, id: &str) -> Result<Id> {
    let review = repo.get_review(id).or_not_found(Error::ReviewNotFound)?;
    repo.delete_review(id).or_not_found(Error::ReviewNotFound)?;
    log::info!("Deleted review {}", review.id);
    Ok(review.id)
}
