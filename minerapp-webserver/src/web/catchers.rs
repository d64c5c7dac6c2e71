use minerapp_boundary::Error as JsonErrorResponse;
use rocket::{
    catch, catchers,
    http::Status,
    response::Redirect,
    serde::json::Json,
    Catcher, Either, Request,
};

use super::guards::accepts_html;

pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";
pub const UNAUTHORIZED_MESSAGE: &str = "No autorizado";

pub fn routes() -> Vec<Catcher> {
    catchers![unauthorized, default_catcher]
}

pub fn admin_routes() -> Vec<Catcher> {
    catchers![admin_unauthorized]
}

fn error_message(status: Status) -> String {
    match status.code {
        401 => UNAUTHORIZED_MESSAGE.to_owned(),
        404 => "No encontrado".to_owned(),
        413 => "Archivo demasiado grande".to_owned(),
        422 => "Datos inválidos".to_owned(),
        500.. => INTERNAL_ERROR_MESSAGE.to_owned(),
        _ => status.reason_lossy().to_owned(),
    }
}

fn json_error(status: Status) -> Json<JsonErrorResponse> {
    Json(JsonErrorResponse {
        http_status: status.code,
        message: error_message(status),
    })
}

// Browsers are sent to the login page, all other
// clients receive a JSON error.
fn unauthorized_or_redirect(
    req: &Request,
    login_page: &'static str,
) -> Either<Redirect, Json<JsonErrorResponse>> {
    if accepts_html(req) {
        debug!("Redirecting unauthorized request of {} to {login_page}", req.uri());
        Either::Left(Redirect::to(login_page))
    } else {
        Either::Right(json_error(Status::Unauthorized))
    }
}

#[catch(401)]
fn unauthorized(req: &Request) -> Either<Redirect, Json<JsonErrorResponse>> {
    unauthorized_or_redirect(req, "/login")
}

#[catch(401)]
fn admin_unauthorized(req: &Request) -> Either<Redirect, Json<JsonErrorResponse>> {
    unauthorized_or_redirect(req, "/admin/login")
}

#[catch(default)]
fn default_catcher(status: Status, _req: &Request) -> Json<JsonErrorResponse> {
    json_error(status)
}
