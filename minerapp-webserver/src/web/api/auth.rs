use minerapp_boundary as json;
use minerapp_core::{
    repositories::{Error as RepoError, UserRepo},
    usecases,
};
use minerapp_db_sqlite::Connections;
use rocket::{get, http::CookieJar, post, serde::json::Json, State};

use super::{created, error::ParameterError, message, JsonResult, Result, StatusResult};
use crate::web::{guards::*, Cfg};

pub const LOGIN_REDIRECT: &str = "/visitante";

#[post("/auth/register", format = "application/json", data = "<new_user>")]
pub fn post_register(
    db: &State<Connections>,
    new_user: JsonResult<json::NewUser>,
) -> StatusResult<json::Message> {
    let json::NewUser {
        name,
        email,
        password,
    } = new_user?.into_inner();
    let new_user = usecases::NewUser {
        name,
        email,
        password,
    };
    let user = usecases::register_user(&db.exclusive()?, new_user)?;
    info!("Registered user {}", user.id);
    Ok(created("Usuario creado".into()))
}

#[post("/auth/login", format = "application/json", data = "<credentials>")]
pub fn post_login(
    db: &State<Connections>,
    cfg: &State<Cfg>,
    cookies: &CookieJar<'_>,
    credentials: JsonResult<json::Credentials>,
) -> Result<json::UserLogin> {
    let json::Credentials { email, password } = credentials?.into_inner();
    let db = db.shared()?;
    let user = usecases::login_user(&db, &email, &password).map_err(|err| {
        debug!("Login with email '{email}' failed: {err}");
        err
    })?;
    let favorite_ids = usecases::favorite_place_ids(&db, &user.id)?;
    start_session(cookies, COOKIE_USER_KEY, &user.id, cfg.session_max_age);
    Ok(Json(json::UserLogin {
        message: "Autenticado".into(),
        redirect_to: LOGIN_REDIRECT.into(),
        user: user.into(),
        favorite_ids: favorite_ids.into_iter().map(Into::into).collect(),
    }))
}

#[post("/auth/logout")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Json<json::Message> {
    end_session(cookies, COOKIE_USER_KEY);
    message("Sesión cerrada")
}

#[get("/session")]
pub fn get_session(db: &State<Connections>, session: UserSession) -> Result<json::Session> {
    let db = db.shared()?;
    let user = match db.get_user(session.user_id().as_str()) {
        Ok(user) => user,
        // The account has been removed after signing in
        Err(RepoError::NotFound) => return Err(ParameterError::Unauthorized.into()),
        Err(err) => return Err(err.into()),
    };
    let favorite_ids = usecases::favorite_place_ids(&db, &user.id)?;
    Ok(Json(json::Session {
        user: user.into(),
        favorite_ids: favorite_ids.into_iter().map(Into::into).collect(),
    }))
}
