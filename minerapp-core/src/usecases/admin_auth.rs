use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub fn register_admin<R: AdminRepo>(repo: &R, new_admin: NewAdmin) -> Result<Admin> {
    let NewAdmin {
        username,
        email,
        password,
    } = new_admin;
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(Error::AdminFieldsRequired);
    }
    if !validate::is_valid_email(email) {
        return Err(Error::Email);
    }
    let email = email.parse::<EmailAddress>()?;
    if repo.try_get_admin_by_username(username)?.is_some()
        || repo.try_get_admin_by_email(&email)?.is_some()
    {
        return Err(Error::AdminExists);
    }
    let admin = Admin {
        id: Id::new(),
        username: username.to_owned(),
        email,
        password: password.parse::<Password>()?,
        created_at: Timestamp::now(),
    };
    log::debug!("Registering new admin: username = {}", admin.username);
    repo.create_admin(&admin).map_err(|err| match err {
        // Registered concurrently
        crate::repositories::Error::AlreadyExists => Error::AdminExists,
        err => Error::Repo(err),
    })?;
    Ok(admin)
}

pub fn login_admin<R: AdminRepo>(repo: &R, username: &str, password: &str) -> Result<Admin> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(Error::AdminCredentialsRequired);
    }
    match repo.try_get_admin_by_username(username)? {
        Some(admin) if admin.password.verify(password) => Ok(admin),
        _ => Err(Error::Credentials),
    }
}
