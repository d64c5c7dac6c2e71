// Query parameters are taken as plain strings, because
// invalid values must fall back to the defaults instead
// of rejecting the request.

use minerapp_core::util::query::{Page, PlaceQuery, ReviewQuery};
use rocket::FromForm;

#[derive(Debug, Default, FromForm)]
pub struct PlaceParams<'r> {
    q: Option<&'r str>,
    categoria: Option<&'r str>,
    tag: Option<&'r str>,
    sort: Option<&'r str>,
    page: Option<&'r str>,
    limit: Option<&'r str>,
}

impl PlaceParams<'_> {
    pub fn query(&self) -> PlaceQuery {
        PlaceQuery::from_params(self.q, self.categoria, self.tag, self.sort)
    }

    pub fn page(&self) -> Page {
        Page::parse_lenient(self.page, self.limit)
    }
}

#[derive(Debug, Default, FromForm)]
pub struct ReviewParams<'r> {
    rating: Option<&'r str>,
    #[field(name = "lugarId")]
    place_id: Option<&'r str>,
    #[field(name = "userId")]
    user_id: Option<&'r str>,
    q: Option<&'r str>,
    sort: Option<&'r str>,
    page: Option<&'r str>,
    limit: Option<&'r str>,
}

impl ReviewParams<'_> {
    pub fn query(&self) -> ReviewQuery {
        ReviewQuery::from_params(self.rating, self.place_id, self.user_id, self.q, self.sort)
    }

    pub fn page(&self) -> Page {
        Page::parse_lenient(self.page, self.limit)
    }

    /// Restricts the reviews to a single place.
    pub fn query_of_place(&self, place_id: &str) -> ReviewQuery {
        ReviewQuery::from_params(self.rating, Some(place_id), self.user_id, self.q, self.sort)
    }
}
