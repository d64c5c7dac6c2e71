use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Category {
    pub id         : Id,
    pub name       : String,
    pub slug       : String,
    pub created_at : Timestamp,
}

impl Category {
    pub fn new(name: String) -> Self {
        let slug = slugify(&name);
        Self {
            id: Id::new(),
            name,
            slug,
            created_at: Timestamp::now(),
        }
    }

    pub fn rename(&mut self, name: String) {
        self.slug = slugify(&name);
        self.name = name;
    }
}

/// Lowercases the name and replaces every run of characters
/// outside of `[a-z0-9]` by a single `-`.
///
/// Leading and trailing dashes are stripped.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}
