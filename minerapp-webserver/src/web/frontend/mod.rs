//! Minimal HTML pages.
//!
//! The pages only render forms and empty containers, all data
//! is loaded and submitted by `app.js` through the JSON routes.

use maud::Markup;
use rocket::{
    get,
    response::{
        content::{RawCss, RawJavaScript},
        Redirect,
    },
    routes, Either, Route,
};

use crate::web::guards::*;

mod view;

#[cfg(test)]
mod tests;

const APP_JS: &str = include_str!("app.js");
const MAIN_CSS: &str = include_str!("main.css");

pub fn routes() -> Vec<Route> {
    routes![
        get_index,
        get_login,
        get_register,
        get_visitor,
        get_app_js,
        get_main_css,
    ]
}

pub fn admin_routes() -> Vec<Route> {
    routes![
        get_admin_index,
        get_admin_login,
        get_admin_register,
        get_dashboard,
        get_places,
        get_categories,
        get_reviews,
    ]
}

#[get("/")]
pub fn get_index(session: Option<UserSession>) -> Markup {
    view::index(session.is_some())
}

#[get("/login")]
pub fn get_login(session: Option<UserSession>) -> Either<Redirect, Markup> {
    if session.is_some() {
        return Either::Left(Redirect::to("/visitante"));
    }
    Either::Right(view::login())
}

#[get("/register")]
pub fn get_register() -> Markup {
    view::register()
}

#[get("/visitante")]
pub fn get_visitor(_session: UserSession) -> Markup {
    view::visitor()
}

#[get("/app.js")]
pub fn get_app_js() -> RawJavaScript<&'static str> {
    RawJavaScript(APP_JS)
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

#[get("/")]
pub fn get_admin_index(session: Option<AdminSession>) -> Redirect {
    if session.is_some() {
        Redirect::to("/admin/dashboard")
    } else {
        Redirect::to("/admin/login")
    }
}

#[get("/login")]
pub fn get_admin_login(session: Option<AdminSession>) -> Either<Redirect, Markup> {
    if session.is_some() {
        return Either::Left(Redirect::to("/admin/dashboard"));
    }
    Either::Right(view::admin_login())
}

#[get("/register")]
pub fn get_admin_register() -> Markup {
    view::admin_register()
}

#[get("/dashboard")]
pub fn get_dashboard(_admin: AdminSession) -> Markup {
    view::dashboard()
}

// Shares the path with the JSON listing, which has a lower rank.
#[get("/lugares", rank = 1)]
pub fn get_places(_html: AcceptsHtml, _admin: AdminSession) -> Markup {
    view::admin_places()
}

#[get("/categorias")]
pub fn get_categories(_admin: AdminSession) -> Markup {
    view::admin_categories()
}

#[get("/reviews")]
pub fn get_reviews(_admin: AdminSession) -> Markup {
    view::admin_reviews()
}
