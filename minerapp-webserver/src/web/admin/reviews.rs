use minerapp_application::prelude as flows;
use minerapp_boundary as json;
use minerapp_core::usecases;
use minerapp_db_sqlite::Connections;
use rocket::{delete, get, serde::json::Json, State};

use crate::web::{
    api::{reviews::review_list, Result},
    guards::AdminSession,
    params::ReviewParams,
};

#[get("/reviews/data?<params..>")]
pub fn get_reviews(
    db: &State<Connections>,
    _admin: AdminSession,
    params: ReviewParams<'_>,
) -> Result<json::ReviewList> {
    let list = usecases::query_reviews(&db.shared()?, &params.query(), params.page())?;
    Ok(Json(review_list(list)))
}

#[get("/reviews/meta")]
pub fn get_review_meta(db: &State<Connections>, _admin: AdminSession) -> Result<json::ReviewMeta> {
    let usecases::ReviewMeta { places, users } = usecases::load_review_meta(&db.shared()?)?;
    Ok(Json(json::ReviewMeta {
        lugares: places.into_iter().map(Into::into).collect(),
        usuarios: users.into_iter().map(Into::into).collect(),
    }))
}

#[delete("/reviews/<id>")]
pub fn delete_review(
    db: &State<Connections>,
    _admin: AdminSession,
    id: &str,
) -> Result<json::ReviewDeleted> {
    let review_id = flows::moderate_review(db, id)?;
    Ok(Json(json::ReviewDeleted {
        deleted: true,
        review_id: review_id.into(),
    }))
}
