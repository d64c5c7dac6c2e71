use super::*;

macro_rules! impl_admin_repo {
    ($db:ty) => {
        impl AdminRepo for $db {
            fn create_admin(&self, admin: &Admin) -> Result<()> {
                create_admin(&mut *self.write_conn()?, admin)
            }

            fn get_admin(&self, id: &str) -> Result<Admin> {
                get_admin(&mut self.read_conn(), id)
            }
            fn try_get_admin_by_username(&self, username: &str) -> Result<Option<Admin>> {
                try_get_admin_by_username(&mut self.read_conn(), username)
            }
            fn try_get_admin_by_email(&self, email: &EmailAddress) -> Result<Option<Admin>> {
                try_get_admin_by_email(&mut self.read_conn(), email)
            }
        }
    };
}

impl_for_connections!(impl_admin_repo);

impl From<models::AdminEntity> for Admin {
    fn from(from: models::AdminEntity) -> Self {
        let models::AdminEntity {
            rowid: _,
            id,
            username,
            email,
            password,
            created_at,
        } = from;
        Self {
            id: id.into(),
            username,
            email: EmailAddress::new_unchecked(email),
            password: Password::from_hash(password),
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

fn create_admin(conn: &mut SqliteConnection, admin: &Admin) -> Result<()> {
    let new_admin = models::NewAdmin {
        id: admin.id.as_str(),
        username: &admin.username,
        email: admin.email.as_str(),
        password: admin.password.as_hash(),
        created_at: admin.created_at.as_millis(),
    };
    diesel::insert_into(schema::admins::table)
        .values(&new_admin)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_admin(conn: &mut SqliteConnection, id: &str) -> Result<Admin> {
    use schema::admins::dsl;
    Ok(schema::admins::table
        .filter(dsl::id.eq(id))
        .first::<models::AdminEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn try_get_admin_by_username(conn: &mut SqliteConnection, username: &str) -> Result<Option<Admin>> {
    use schema::admins::dsl;
    Ok(schema::admins::table
        .filter(dsl::username.eq(username))
        .first::<models::AdminEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn try_get_admin_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<Option<Admin>> {
    use schema::admins::dsl;
    Ok(schema::admins::table
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::AdminEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}
