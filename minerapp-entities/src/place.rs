use itertools::Itertools;

use crate::{id::*, location::*, time::*};
use url::Url;

/// A point of interest ("lugar").
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id          : Id,
    pub name        : String,
    pub description : Option<String>,
    pub category    : Option<String>,
    pub tags        : Vec<String>,
    pub images      : Vec<String>,
    pub location    : Option<Location>,
    pub map_link    : Option<Url>,
    pub created_by  : Option<Id>,
    pub visits      : u64,
    pub likes       : u64,
    pub active      : bool,
    pub featured    : bool,
    pub created_at  : Timestamp,
    pub updated_at  : Timestamp,
}

impl Place {
    /// Appends image paths that are not yet attached.
    pub fn attach_images(&mut self, paths: impl IntoIterator<Item = String>) {
        for path in paths {
            if !self.images.contains(&path) {
                self.images.push(path);
            }
        }
    }

    /// Detaches the given image paths and returns those that were
    /// actually attached.
    pub fn detach_images<'a>(&mut self, paths: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let paths: Vec<_> = paths.into_iter().collect();
        let (removed, kept) = self
            .images
            .drain(..)
            .partition(|img| paths.contains(&img.as_str()));
        self.images = kept;
        removed
    }
}

/// Trims all tags, drops empty ones and removes duplicates
/// while keeping the order of first occurrence.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|t| t.as_ref().trim().to_owned())
        .filter(|t| !t.is_empty())
        .unique()
        .collect()
}

/// The few place attributes shown next to a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceRef {
    pub id: Id,
    pub name: String,
    pub category: Option<String>,
}

impl From<&Place> for PlaceRef {
    fn from(from: &Place) -> Self {
        Self {
            id: from.id.clone(),
            name: from.name.clone(),
            category: from.category.clone(),
        }
    }
}
