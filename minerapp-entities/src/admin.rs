use crate::{email::EmailAddress, id::Id, password::Password, time::Timestamp};

/// An account of the administration panel.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub id         : Id,
    pub username   : String,
    pub email      : EmailAddress,
    pub password   : Password,
    pub created_at : Timestamp,
}
