use minerapp_boundary as json;
use minerapp_core::usecases;
use minerapp_db_sqlite::Connections;
use rocket::{get, serde::json::Json, State};

use super::{reviews::review_list, Result};
use crate::web::{
    guards::UserSession,
    params::{PlaceParams, ReviewParams},
};

pub fn place_list<T, U>(list: usecases::PlaceList<U>, f: impl Fn(U) -> T) -> json::PlaceList<T> {
    let usecases::PlaceList { items, total, page } = list;
    json::PlaceList {
        data: items.into_iter().map(f).collect(),
        total,
        page: page.page,
        limit: page.limit,
    }
}

#[get("/lugares?<params..>")]
pub fn get_places(
    db: &State<Connections>,
    session: Option<UserSession>,
    params: PlaceParams<'_>,
) -> Result<json::PlaceList<json::PlaceWithFavorites>> {
    let viewer_id = session.as_ref().map(|s| s.user_id().as_str());
    let list = usecases::query_places_with_favorites(
        &db.shared()?,
        &params.query(),
        params.page(),
        viewer_id,
    )?;
    Ok(Json(place_list(list, |p| (p.place, p.favorites).into())))
}

#[get("/lugares/<id>")]
pub fn get_place(db: &State<Connections>, id: &str) -> Result<json::Place> {
    let place = usecases::visit_place(&db.exclusive()?, id)?;
    Ok(Json(place.into()))
}

#[get("/lugares/<id>/reviews?<params..>")]
pub fn get_place_reviews(
    db: &State<Connections>,
    id: &str,
    params: ReviewParams<'_>,
) -> Result<json::ReviewList> {
    let db = db.shared()?;
    let place = usecases::get_place(&db, id)?;
    let query = params.query_of_place(place.id.as_str());
    let list = usecases::query_reviews(&db, &query, params.page())?;
    Ok(Json(review_list(list)))
}
