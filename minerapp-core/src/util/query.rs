//! Filter, sort and pagination descriptors built from
//! raw request parameters.
//!
//! Invalid numbers or unknown sort fields never fail; they
//! silently fall back to the defaults.

use crate::{entities::*, repositories::Pagination};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    // Everything except "asc" sorts descending.
    fn parse_lenient(s: Option<&str>) -> Self {
        match s.map(str::trim) {
            Some("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceSortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Name,
    Visits,
    Likes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaceSort {
    pub field: PlaceSortField,
    pub direction: SortDirection,
}

impl PlaceSort {
    /// Parses `field:direction`, e.g. `visitas:asc`.
    ///
    /// An unknown field resets the whole sort order to the default,
    /// i.e. newest first.
    pub fn parse_lenient(s: Option<&str>) -> Self {
        let Some((field, direction)) = split_sort_param(s) else {
            return Self::default();
        };
        let field = match field {
            "createdAt" => PlaceSortField::CreatedAt,
            "updatedAt" => PlaceSortField::UpdatedAt,
            "nombre" => PlaceSortField::Name,
            "visitas" => PlaceSortField::Visits,
            "likes" => PlaceSortField::Likes,
            _ => return Self::default(),
        };
        Self {
            field,
            direction: SortDirection::parse_lenient(direction),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewSortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReviewSort {
    pub field: ReviewSortField,
    pub direction: SortDirection,
}

impl ReviewSort {
    /// Parses `field:direction`, e.g. `rating:asc`.
    ///
    /// Unlike [`PlaceSort::parse_lenient`] an unknown field
    /// only replaces the field and keeps the requested direction.
    pub fn parse_lenient(s: Option<&str>) -> Self {
        let Some((field, direction)) = split_sort_param(s) else {
            return Self::default();
        };
        let field = match field {
            "updatedAt" => ReviewSortField::UpdatedAt,
            "rating" => ReviewSortField::Rating,
            _ => ReviewSortField::CreatedAt,
        };
        Self {
            field,
            direction: SortDirection::parse_lenient(direction),
        }
    }
}

fn split_sort_param(s: Option<&str>) -> Option<(&str, Option<&str>)> {
    let s = s.map(str::trim).filter(|s| !s.is_empty())?;
    let mut parts = s.splitn(2, ':');
    let field = parts.next().unwrap_or_default().trim();
    Some((field, parts.next()))
}

/// One-based page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u64,
    pub limit: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: 1,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

impl Page {
    pub const DEFAULT_LIMIT: u64 = 20;
    pub const MAX_LIMIT: u64 = 100;

    pub fn parse_lenient(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<i64>().ok())
            .map(|p| p.max(1) as u64)
            .unwrap_or(1);
        let limit = limit
            .and_then(|l| l.trim().parse::<i64>().ok())
            .map(|l| l.clamp(1, Self::MAX_LIMIT as i64) as u64)
            .unwrap_or(Self::DEFAULT_LIMIT);
        Self { page, limit }
    }

    /// Pages beyond the largest offset a database can handle
    /// are simply empty.
    pub const MAX_OFFSET: u64 = i64::MAX as u64;

    pub const fn offset(&self) -> u64 {
        let offset = self.page.saturating_sub(1).saturating_mul(self.limit);
        if offset > Self::MAX_OFFSET {
            Self::MAX_OFFSET
        } else {
            offset
        }
    }

    pub const fn pagination(&self) -> Pagination {
        Pagination {
            offset: Some(self.offset()),
            limit: Some(self.limit),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceQuery {
    /// Matches either the name or the description
    pub text: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub sort: PlaceSort,
}

impl PlaceQuery {
    pub fn from_params(
        text: Option<&str>,
        category: Option<&str>,
        tag: Option<&str>,
        sort: Option<&str>,
    ) -> Self {
        Self {
            text: non_empty(text),
            category: non_empty(category),
            tag: non_empty(tag),
            sort: PlaceSort::parse_lenient(sort),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewQuery {
    // Kept as a plain number: out of range values
    // are valid filters that just match nothing.
    pub rating: Option<i64>,
    pub place_id: Option<Id>,
    pub user_id: Option<Id>,
    /// Matches the comment, the user's name or email
    /// and the place's name or category
    pub text: Option<String>,
    pub sort: ReviewSort,
}

impl ReviewQuery {
    pub fn from_params(
        rating: Option<&str>,
        place_id: Option<&str>,
        user_id: Option<&str>,
        text: Option<&str>,
        sort: Option<&str>,
    ) -> Self {
        Self {
            rating: rating.and_then(|r| r.trim().parse().ok()),
            place_id: well_formed_id(place_id),
            user_id: well_formed_id(user_id),
            text: non_empty(text),
            sort: ReviewSort::parse_lenient(sort),
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
}

// Malformed ids are ignored instead of being rejected.
fn well_formed_id(s: Option<&str>) -> Option<Id> {
    s.map(|s| Id::from(s.trim()))
        .filter(Id::is_well_formed)
}
