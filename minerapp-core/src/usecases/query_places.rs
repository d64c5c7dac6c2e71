use super::prelude::*;
use crate::util::query::{Page, PlaceQuery};

#[derive(Debug, Clone)]
pub struct PlaceList<T> {
    pub items: Vec<T>,
    /// Number of all matching places, independent of the page
    pub total: u64,
    pub page: Page,
}

pub fn query_places<R: PlaceRepo>(repo: &R, query: &PlaceQuery, page: Page) -> Result<PlaceList<Place>> {
    let items = repo.query_places(query, &page.pagination())?;
    let total = repo.count_places(query)?;
    Ok(PlaceList { items, total, page })
}

#[derive(Debug, Clone)]
pub struct PlaceWithFavorites {
    pub place: Place,
    pub favorites: FavoriteSummary,
}

/// Like [`query_places`] but annotates every place with
/// its favorite statistics as seen by the viewer.
pub fn query_places_with_favorites<R>(
    repo: &R,
    query: &PlaceQuery,
    page: Page,
    viewer_id: Option<&str>,
) -> Result<PlaceList<PlaceWithFavorites>>
where
    R: PlaceRepo + FavoriteRepo,
{
    let PlaceList { items, total, page } = query_places(repo, query, page)?;
    let ids: Vec<_> = items.iter().map(|p| p.id.as_str()).collect();
    let mut summaries = repo.summarize_favorites(&ids, viewer_id)?;
    let items = items
        .into_iter()
        .map(|place| {
            let favorites = summaries
                .iter()
                .position(|(id, _)| *id == place.id)
                .map(|i| summaries.swap_remove(i).1)
                .unwrap_or_default();
            PlaceWithFavorites { place, favorites }
        })
        .collect();
    Ok(PlaceList { items, total, page })
}
