use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub fn register_user<R: UserRepo>(repo: &R, new_user: NewUser) -> Result<User> {
    let NewUser {
        name,
        email,
        password,
    } = new_user;
    let name = name.trim();
    if name.is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(Error::UserFieldsRequired);
    }
    let email = email.parse::<EmailAddress>()?;
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    let user = User {
        id: Id::new(),
        name: name.to_owned(),
        email,
        password: password.parse::<Password>()?,
        created_at: Timestamp::now(),
    };
    log::debug!("Registering new user: email = {}", user.email);
    repo.create_user(&user).map_err(|err| match err {
        crate::repositories::Error::AlreadyExists => Error::UserExists,
        err => Error::Repo(err),
    })?;
    Ok(user)
}

pub fn login_user<R: UserRepo>(repo: &R, email: &str, password: &str) -> Result<User> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(Error::UserCredentialsRequired);
    }
    let Ok(email) = email.parse::<EmailAddress>() else {
        return Err(Error::Credentials);
    };
    match repo.try_get_user_by_email(&email)? {
        Some(user) if user.password.verify(password) => Ok(user),
        _ => Err(Error::Credentials),
    }
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Ana".into(),
            email: email.into(),
            password: "secret".into(),
        }
    }

    #[test]
    fn register_two_users() {
        let db = MockDb::default();
        register_user(&db, new_user("ana@example.com")).unwrap();
        register_user(&db, new_user("bea@example.com")).unwrap();
        assert_eq!(2, db.users.borrow().len());
    }

    #[test]
    fn never_store_plaintext_password() {
        let db = MockDb::default();
        register_user(&db, new_user("ana@example.com")).unwrap();
        let users = db.users.borrow();
        assert_ne!("secret", users[0].password.as_hash());
        assert!(users[0].password.verify("secret"));
    }

    #[test]
    fn register_with_existing_email() {
        let db = MockDb::default();
        register_user(&db, new_user("ana@example.com")).unwrap();
        assert!(matches!(
            register_user(&db, new_user("ANA@example.com")),
            Err(Error::UserExists)
        ));
    }

    #[test]
    fn register_with_missing_fields() {
        let db = MockDb::default();
        let mut u = new_user("ana@example.com");
        u.name = " ".into();
        assert!(matches!(
            register_user(&db, u),
            Err(Error::UserFieldsRequired)
        ));
    }

    #[test]
    fn login() {
        let db = MockDb::default();
        let user = register_user(&db, new_user("ana@example.com")).unwrap();
        assert_eq!(user.id, login_user(&db, "ana@example.com", "secret").unwrap().id);
        assert!(matches!(
            login_user(&db, "ana@example.com", "wrong"),
            Err(Error::Credentials)
        ));
        assert!(matches!(
            login_user(&db, "", "secret"),
            Err(Error::UserCredentialsRequired)
        ));
        assert!(matches!(
            login_user(&db, "not an email", "secret"),
            Err(Error::Credentials)
        ));
    }
}
