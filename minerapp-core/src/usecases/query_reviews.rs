use super::prelude::*;
use crate::util::query::{Page, ReviewQuery};

#[derive(Debug, Clone)]
pub struct ReviewList {
    pub items: Vec<ReviewWithRefs>,
    pub total: u64,
    pub page: Page,
    pub rating_summary: Vec<RatingCount>,
}

/// The paginated listing, the total count and the rating summary
/// all share the same filter.
pub fn query_reviews<R: ReviewRepo>(repo: &R, query: &ReviewQuery, page: Page) -> Result<ReviewList> {
    let items = repo.query_reviews(query, &page.pagination())?;
    let total = repo.count_reviews(query)?;
    let mut rating_summary = repo.summarize_review_ratings(query)?;
    rating_summary.sort_by(|a, b| b.rating.cmp(&a.rating));
    Ok(ReviewList {
        items,
        total,
        page,
        rating_summary,
    })
}
