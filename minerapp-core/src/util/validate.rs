use crate::entities::{Location, Review, Url};

pub use fast_chemail::is_valid_email;

/// Trims the value and maps blank strings to `None`.
pub fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

pub fn is_valid_location(location: &Location) -> bool {
    location.is_valid()
}

/// Only absolute web links are accepted as map links.
pub fn parse_map_link(s: &str) -> Option<Url> {
    let url = s.trim().parse::<Url>().ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

pub fn is_valid_comment(comment: &str) -> bool {
    comment.chars().count() <= Review::MAX_COMMENT_LEN
}
