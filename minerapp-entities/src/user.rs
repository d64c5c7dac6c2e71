use crate::{email::EmailAddress, id::Id, password::Password, time::Timestamp};

/// A visitor account of the public site.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id         : Id,
    pub name       : String,
    pub email      : EmailAddress,
    pub password   : Password,
    pub created_at : Timestamp,
}

/// Public user attributes, e.g. for the author of a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub id: Id,
    pub name: String,
    pub email: EmailAddress,
}

impl From<&User> for UserRef {
    fn from(from: &User) -> Self {
        let User {
            id, name, email, ..
        } = from;
        Self {
            id: id.clone(),
            name: name.clone(),
            email: email.clone(),
        }
    }
}
