use minerapp_core::{entities::Id, gateways::images::ImageStore};
use rocket::{
    http::{Cookie, CookieJar, SameSite, Status},
    request::{FromRequest, Outcome, Request},
    time::Duration,
};

pub const COOKIE_ADMIN_KEY: &str = "minerapp-admin";
pub const COOKIE_USER_KEY: &str = "minerapp-user";

fn session_id(request: &Request, key: &str) -> Option<Id> {
    request
        .cookies()
        .get_private(key)
        .map(|cookie| Id::from(cookie.value()))
        .filter(Id::is_well_formed)
}

pub fn start_session(
    cookies: &CookieJar<'_>,
    key: &'static str,
    id: &Id,
    max_age: std::time::Duration,
) {
    let max_age = Duration::try_from(max_age).unwrap_or(Duration::DAY);
    cookies.add_private(
        Cookie::build((key, id.to_string()))
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(max_age),
    );
}

pub fn end_session(cookies: &CookieJar<'_>, key: &'static str) {
    cookies.remove_private(key);
}

/// A signed in administrator.
#[derive(Debug)]
pub struct AdminSession {
    admin_id: Id,
}

impl AdminSession {
    pub fn admin_id(&self) -> &Id {
        &self.admin_id
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AdminSession {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match session_id(request, COOKIE_ADMIN_KEY) {
            Some(admin_id) => Outcome::Success(Self { admin_id }),
            None => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

/// A signed in visitor.
///
/// Use `Option<UserSession>` for routes that are
/// also available without signing in.
#[derive(Debug)]
pub struct UserSession {
    user_id: Id,
}

impl UserSession {
    pub fn user_id(&self) -> &Id {
        &self.user_id
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for UserSession {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match session_id(request, COOKIE_USER_KEY) {
            Some(user_id) => Outcome::Success(Self { user_id }),
            None => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

/// Checks if the `Accept` header of a request lists `text/html`.
pub fn accepts_html(request: &Request) -> bool {
    request
        .accept()
        .map_or(false, |accept| accept.iter().any(|media_type| media_type.is_html()))
}

/// Succeeds only for requests of a browser that wants a page.
///
/// Otherwise the request is forwarded, usually to a JSON route
/// with a lower rank.
#[derive(Debug)]
pub struct AcceptsHtml;

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AcceptsHtml {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        if accepts_html(request) {
            Outcome::Success(AcceptsHtml)
        } else {
            Outcome::Forward(Status::NotAcceptable)
        }
    }
}

/// The storage of uploaded images, managed as state.
pub struct Images(pub Box<dyn ImageStore + Send + Sync>);

impl Images {
    pub fn store(&self) -> &(dyn ImageStore + Send + Sync) {
        &*self.0
    }
}
