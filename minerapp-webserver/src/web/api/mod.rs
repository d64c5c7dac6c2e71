use std::{fmt::Display, result};

use minerapp_boundary::Error as JsonErrorResponse;
use rocket::{
    self,
    http::Status,
    response::{self, status, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route,
};

mod auth;
pub mod error;
mod favorites;
pub mod places;
pub mod reviews;

pub use self::error::Error as ApiError;


pub type Result<T> = result::Result<Json<T>, ApiError>;
pub type StatusResult<T> = result::Result<status::Custom<Json<T>>, ApiError>;
pub type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   auth   --- //
        auth::post_register,
        auth::post_login,
        auth::post_logout,
        auth::get_session,
        // ---   places   --- //
        places::get_places,
        places::get_place,
        places::get_place_reviews,
        // ---   favorites   --- //
        favorites::get_favorites,
        favorites::post_favorite,
        favorites::delete_favorite,
        // ---   reviews   --- //
        reviews::post_review,
        reviews::put_review,
        reviews::delete_review,
    ]
}

pub fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

pub fn created<T>(body: T) -> status::Custom<Json<T>> {
    status::Custom(Status::Created, Json(body))
}

pub fn message(msg: &str) -> Json<minerapp_boundary::Message> {
    Json(msg.into())
}
