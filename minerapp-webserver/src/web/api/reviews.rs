use minerapp_application::prelude as flows;
use minerapp_boundary as json;
use minerapp_core::usecases;
use minerapp_db_sqlite::Connections;
use rocket::{delete, http::Status, post, put, response::status, serde::json::Json, State};

use super::{message, JsonResult, Result, StatusResult};
use crate::web::guards::UserSession;

pub fn review_list(list: usecases::ReviewList) -> json::ReviewList {
    let usecases::ReviewList {
        items,
        total,
        page,
        rating_summary,
    } = list;
    json::ReviewList {
        data: items.into_iter().map(Into::into).collect(),
        page: page.page,
        limit: page.limit,
        total,
        rating_summary: rating_summary.into_iter().map(Into::into).collect(),
    }
}

#[post("/reviews", format = "application/json", data = "<review>")]
pub fn post_review(
    db: &State<Connections>,
    session: UserSession,
    review: JsonResult<json::NewReview>,
) -> StatusResult<json::ReviewResponse> {
    let json::NewReview {
        lugar_id,
        rating,
        comment,
    } = review?.into_inner();
    let new_review = usecases::NewReview {
        place_id: lugar_id,
        rating,
        comment,
    };
    let (review, outcome) = flows::submit_review(db, session.user_id(), new_review)?;
    let (status, message) = match outcome {
        usecases::ReviewOutcome::Created => (Status::Created, "Reseña creada"),
        usecases::ReviewOutcome::Updated => (Status::Ok, "Reseña actualizada"),
    };
    Ok(status::Custom(
        status,
        Json(json::ReviewResponse {
            message: message.into(),
            review: review.into(),
        }),
    ))
}

#[put("/reviews/<id>", format = "application/json", data = "<changes>")]
pub fn put_review(
    db: &State<Connections>,
    session: UserSession,
    id: &str,
    changes: JsonResult<json::ReviewChanges>,
) -> Result<json::ReviewResponse> {
    let json::ReviewChanges { rating, comment } = changes?.into_inner();
    let changes = usecases::ReviewChanges { rating, comment };
    let review = flows::update_own_review(db, session.user_id(), id, changes)?;
    Ok(Json(json::ReviewResponse {
        message: "Reseña actualizada".into(),
        review: review.into(),
    }))
}

#[delete("/reviews/<id>")]
pub fn delete_review(
    db: &State<Connections>,
    session: UserSession,
    id: &str,
) -> Result<json::Message> {
    flows::delete_own_review(db, session.user_id(), id)?;
    Ok(message("Reseña eliminada"))
}
