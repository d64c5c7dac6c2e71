use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone, Default)]
pub struct NewReview {
    pub place_id: Option<String>,
    pub rating: Option<i64>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    Created,
    Updated,
}

fn check_rating(rating: Option<i64>) -> Result<RatingValue> {
    Ok(RatingValue::try_from(rating.ok_or(Error::RatingValue)?)?)
}

fn check_comment(comment: Option<String>) -> Result<Option<String>> {
    let comment = validate::non_blank(comment);
    if let Some(c) = &comment {
        if !validate::is_valid_comment(c) {
            return Err(Error::Comment);
        }
    }
    Ok(comment)
}

pub(crate) fn with_refs<R>(repo: &R, review: Review) -> Result<ReviewWithRefs>
where
    R: PlaceRepo + UserRepo,
{
    let user = match repo.get_user(review.user_id.as_str()) {
        Ok(user) => Some(UserRef::from(&user)),
        Err(crate::repositories::Error::NotFound) => None,
        Err(err) => return Err(err.into()),
    };
    let place = match repo.get_place(review.place_id.as_str()) {
        Ok(place) => Some(PlaceRef::from(&place)),
        Err(crate::repositories::Error::NotFound) => None,
        Err(err) => return Err(err.into()),
    };
    Ok(ReviewWithRefs {
        review,
        user,
        place,
    })
}

/// Creates a review or updates the existing review
/// of the same user for the same place.
pub fn submit_review<R>(
    repo: &R,
    user_id: &Id,
    new_review: NewReview,
) -> Result<(ReviewWithRefs, ReviewOutcome)>
where
    R: PlaceRepo + UserRepo + ReviewRepo,
{
    let NewReview {
        place_id,
        rating,
        comment,
    } = new_review;
    let place_id = validate::non_blank(place_id).ok_or(Error::MissingPlaceId)?;
    let rating = check_rating(rating)?;
    let comment = check_comment(comment)?;
    let place = repo
        .get_place(&place_id)
        .or_not_found(Error::PlaceNotFound)?;

    let existing = repo.try_get_review_of_user_and_place(user_id.as_str(), place.id.as_str())?;
    let (review, outcome) = match existing {
        Some(review) => (update_existing(repo, review, rating, comment)?, ReviewOutcome::Updated),
        None => {
            let now = Timestamp::now();
            let review = Review {
                id: Id::new(),
                user_id: user_id.clone(),
                place_id: place.id.clone(),
                rating,
                comment: comment.clone(),
                created_at: now,
                updated_at: now,
            };
            match repo.create_review(&review) {
                Ok(()) => (review, ReviewOutcome::Created),
                Err(crate::repositories::Error::AlreadyExists) => {
                    // Another request created the review in the meantime
                    log::debug!(
                        "Concurrent review of place {} by user {}",
                        place.id,
                        user_id
                    );
                    let review = repo
                        .try_get_review_of_user_and_place(user_id.as_str(), place.id.as_str())?
                        .ok_or(crate::repositories::Error::NotFound)?;
                    (update_existing(repo, review, rating, comment)?, ReviewOutcome::Updated)
                }
                Err(err) => return Err(err.into()),
            }
        }
    };
    Ok((with_refs(repo, review)?, outcome))
}

fn update_existing<R: ReviewRepo>(
    repo: &R,
    mut review: Review,
    rating: RatingValue,
    comment: Option<String>,
) -> Result<Review> {
    review.rating = rating;
    review.comment = comment;
    review.updated_at = Timestamp::now();
    repo.update_review(&review)?;
    Ok(review)
}

#[derive(Debug, Clone, Default)]
pub struct ReviewChanges {
    pub rating: Option<i64>,
    pub comment: Option<String>,
}

fn get_own_review<R: ReviewRepo>(repo: &R, user_id: &Id, review_id: &str) -> Result<Review> {
    let review = repo
        .get_review(review_id)
        .or_not_found(Error::ReviewNotFound)?;
    // Reviews of other users are hidden
    if review.user_id != *user_id {
        return Err(Error::ReviewNotFound);
    }
    Ok(review)
}

pub fn update_own_review<R>(
    repo: &R,
    user_id: &Id,
    review_id: &str,
    changes: ReviewChanges,
) -> Result<ReviewWithRefs>
where
    R: PlaceRepo + UserRepo + ReviewRepo,
{
    let ReviewChanges { rating, comment } = changes;
    let review = get_own_review(repo, user_id, review_id)?;
    let rating = match rating {
        Some(_) => check_rating(rating)?,
        None => review.rating,
    };
    let comment = match comment {
        Some(_) => check_comment(comment)?,
        None => review.comment.clone(),
    };
    let review = update_existing(repo, review, rating, comment)?;
    with_refs(repo, review)
}

pub fn delete_own_review<R: ReviewRepo>(repo: &R, user_id: &Id, review_id: &str) -> Result<()> {
    let review = get_own_review(repo, user_id, review_id)?;
    repo.delete_review(review.id.as_str())
        .or_not_found(Error::ReviewNotFound)
}
