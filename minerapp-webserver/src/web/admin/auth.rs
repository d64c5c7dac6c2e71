use minerapp_boundary as json;
use minerapp_core::usecases;
use minerapp_db_sqlite::Connections;
use rocket::{
    get, http::CookieJar, post, response::Redirect, serde::json::Json, Either, State,
};

use crate::web::{
    api::{created, message, JsonResult, Result, StatusResult},
    guards::*,
    Cfg,
};

#[post("/register", format = "application/json", data = "<new_admin>")]
pub fn post_register(
    db: &State<Connections>,
    new_admin: JsonResult<json::NewAdmin>,
) -> StatusResult<json::Message> {
    let json::NewAdmin {
        username,
        email,
        password,
    } = new_admin?.into_inner();
    let new_admin = usecases::NewAdmin {
        username,
        email,
        password,
    };
    let admin = usecases::register_admin(&db.exclusive()?, new_admin)?;
    info!("Registered admin {} ({})", admin.username, admin.id);
    Ok(created("Administrador registrado exitosamente".into()))
}

#[post("/login", format = "application/json", data = "<credentials>")]
pub fn post_login(
    db: &State<Connections>,
    cfg: &State<Cfg>,
    cookies: &CookieJar<'_>,
    credentials: JsonResult<json::AdminCredentials>,
) -> Result<json::Message> {
    let json::AdminCredentials { username, password } = credentials?.into_inner();
    let admin = usecases::login_admin(&db.shared()?, &username, &password).map_err(|err| {
        debug!("Login of admin '{username}' failed: {err}");
        err
    })?;
    start_session(cookies, COOKIE_ADMIN_KEY, &admin.id, cfg.session_max_age);
    Ok(message("Login exitoso"))
}

#[get("/logout")]
pub fn get_logout(
    _admin: AdminSession,
    cookies: &CookieJar<'_>,
    html: Option<AcceptsHtml>,
) -> Either<Redirect, Json<json::Message>> {
    end_session(cookies, COOKIE_ADMIN_KEY);
    if html.is_some() {
        Either::Left(Redirect::to("/admin/login"))
    } else {
        Either::Right(message("Sesión cerrada exitosamente"))
    }
}
