//! JSON routes of the admin panel, mounted at `/admin`.
//!
//! All routes except registration and login require an
//! [`AdminSession`](super::guards::AdminSession).

use rocket::{routes, Route};

mod auth;
mod categories;
mod places;
mod reviews;


pub fn routes() -> Vec<Route> {
    routes![
        // ---   auth   --- //
        auth::post_register,
        auth::post_login,
        auth::get_logout,
        // ---   places   --- //
        places::get_places,
        places::post_place,
        places::get_place,
        places::put_place,
        places::delete_place,
        // ---   categories   --- //
        categories::get_categories,
        categories::post_category,
        categories::put_category,
        categories::delete_category,
        // ---   reviews   --- //
        reviews::get_reviews,
        reviews::get_review_meta,
        reviews::delete_review,
    ]
}
