use minerapp_application::prelude as flows;
use minerapp_boundary as json;
use minerapp_core::usecases;
use minerapp_db_sqlite::Connections;
use rocket::{delete, get, http::Status, post, response::status, serde::json::Json, State};

use super::{message, Result, StatusResult};
use crate::web::guards::UserSession;

#[get("/favoritos")]
pub fn get_favorites(db: &State<Connections>, session: UserSession) -> Result<Vec<json::Place>> {
    let places = usecases::favorite_places(&db.shared()?, session.user_id())?;
    Ok(Json(places.into_iter().map(Into::into).collect()))
}

#[post("/favoritos/<place_id>")]
pub fn post_favorite(
    db: &State<Connections>,
    session: UserSession,
    place_id: &str,
) -> StatusResult<json::FavoriteResponse> {
    let (favorite, created) = flows::add_favorite(db, session.user_id(), place_id)?;
    let (status, message) = if created {
        (Status::Created, "Agregado a favoritos")
    } else {
        (Status::Ok, "El lugar ya está en favoritos")
    };
    Ok(status::Custom(
        status,
        Json(json::FavoriteResponse {
            message: message.into(),
            favorite: favorite.into(),
        }),
    ))
}

#[delete("/favoritos/<place_id>")]
pub fn delete_favorite(
    db: &State<Connections>,
    session: UserSession,
    place_id: &str,
) -> Result<json::Message> {
    // Removing a place that is not a favorite succeeds as well
    let removed = flows::remove_favorite(db, session.user_id(), place_id)?;
    debug!("Removed favorite {place_id} of user {}: {removed}", session.user_id());
    Ok(message("Eliminado de favoritos"))
}
