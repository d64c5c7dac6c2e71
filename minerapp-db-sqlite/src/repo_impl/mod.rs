// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
    sql_types::{Nullable, Text},
};

use minerapp_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

// Repository traits are implemented for all connection types.
// Read-only connections reject every write operation.
macro_rules! impl_for_connections {
    ($impl_macro:ident) => {
        $impl_macro!(DbReadOnly<'_>);
        $impl_macro!(DbReadWrite<'_>);
        $impl_macro!(DbConnection<'_>);
    };
}

mod admin;
mod category;
mod favorite;
mod place;
mod review;
mod user;

const LIKE_ESCAPE_CHAR: char = '\\';

define_sql_function! {
    /// Unicode-aware replacement for the ASCII-only `lower()` of SQLite.
    ///
    /// Must be registered on every connection, see [`register_sql_functions`].
    fn unicode_lower(x: Nullable<Text>) -> Nullable<Text>;
}

pub(crate) fn register_sql_functions(conn: &mut SqliteConnection) -> diesel::QueryResult<()> {
    unicode_lower_utils::register_impl(conn, |x: Option<String>| {
        x.map(|x| x.to_lowercase())
    })
}

/// Pattern for a case-insensitive substring match with `LIKE`.
///
/// The matched column must be wrapped with `unicode_lower()`,
/// because `LIKE` only folds the case of ASCII characters.
fn like_pattern(text: &str) -> String {
    let escaped = text
        .to_lowercase()
        .replace(LIKE_ESCAPE_CHAR, "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

fn load_url(url: String) -> Option<Url> {
    url.parse()
        .map_err(|err| {
            // This should never happen if URLs have been validated properly on insert
            log::error!("Failed to load invalid URL '{url}': {err}");
        })
        .ok()
}

fn load_rating(rating: i16) -> Result<RatingValue> {
    RatingValue::try_from(i64::from(rating))
        .map_err(|err| repo::Error::Other(anyhow::anyhow!("Invalid rating value: {}", err.0)))
}

fn load_comment(comment: String) -> Option<String> {
    if comment.is_empty() {
        None
    } else {
        Some(comment)
    }
}

fn resolve_user_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::users::dsl;
    schema::users::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn resolve_place_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::places::dsl;
    schema::places::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn pagination_bounds(pagination: &Pagination) -> (i64, i64) {
    let offset = pagination.offset.unwrap_or(0) as i64;
    // SQLite requires a LIMIT clause for an OFFSET
    let limit = pagination.limit.map(|l| l as i64).unwrap_or(i64::MAX);
    (offset, limit)
}
