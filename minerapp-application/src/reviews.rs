use super::*;

pub fn submit_review(
    connections: &sqlite::Connections,
    user_id: &Id,
    new_review: usecases::NewReview,
) -> Result<(ReviewWithRefs, usecases::ReviewOutcome)> {
    let (review, outcome) = connections
        .exclusive()?
        .transaction(|conn| usecases::submit_review(conn, user_id, new_review))?;
    debug!(
        "{outcome:?} review {} of place {} by user {user_id}",
        review.review.id, review.review.place_id
    );
    Ok((review, outcome))
}

pub fn update_own_review(
    connections: &sqlite::Connections,
    user_id: &Id,
    review_id: &str,
    changes: usecases::ReviewChanges,
) -> Result<ReviewWithRefs> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::update_own_review(conn, user_id, review_id, changes))?)
}

pub fn delete_own_review(connections: &sqlite::Connections, user_id: &Id, review_id: &str) -> Result<()> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::delete_own_review(conn, user_id, review_id))?)
}

/// Deletes any review on behalf of an admin.
pub fn moderate_review(connections: &sqlite::Connections, review_id: &str) -> Result<Id> {
    let id = connections
        .exclusive()?
        .transaction(|conn| usecases::delete_review(conn, review_id))?;
    Ok(id)
}
