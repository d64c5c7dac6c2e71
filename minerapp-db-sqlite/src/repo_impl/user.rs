use super::*;

macro_rules! impl_user_repo {
    ($db:ty) => {
        impl UserRepo for $db {
            fn create_user(&self, user: &User) -> Result<()> {
                create_user(&mut *self.write_conn()?, user)
            }

            fn get_user(&self, id: &str) -> Result<User> {
                get_user(&mut self.read_conn(), id)
            }
            fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
                try_get_user_by_email(&mut self.read_conn(), email)
            }

            fn list_user_refs(&self, pagination: &Pagination) -> Result<Vec<UserRef>> {
                list_user_refs(&mut self.read_conn(), pagination)
            }
        }
    };
}

impl_for_connections!(impl_user_repo);

impl From<models::UserEntity> for User {
    fn from(from: models::UserEntity) -> Self {
        let models::UserEntity {
            rowid: _,
            id,
            name,
            email,
            password,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            email: EmailAddress::new_unchecked(email),
            password: Password::from_hash(password),
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

fn create_user(conn: &mut SqliteConnection, user: &User) -> Result<()> {
    let new_user = models::NewUser {
        id: user.id.as_str(),
        name: &user.name,
        email: user.email.as_str(),
        password: user.password.as_hash(),
        created_at: user.created_at.as_millis(),
    };
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_user(conn: &mut SqliteConnection, id: &str) -> Result<User> {
    use schema::users::dsl;
    Ok(schema::users::table
        .filter(dsl::id.eq(id))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn try_get_user_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(schema::users::table
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn list_user_refs(conn: &mut SqliteConnection, pagination: &Pagination) -> Result<Vec<UserRef>> {
    use schema::users::dsl;
    let (offset, limit) = pagination_bounds(pagination);
    Ok(schema::users::table
        .select((dsl::id, dsl::name, dsl::email))
        .order_by(dsl::name)
        .then_order_by(dsl::rowid)
        .offset(offset)
        .limit(limit)
        .load::<(String, String, String)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|(id, name, email)| UserRef {
            id: id.into(),
            name,
            email: EmailAddress::new_unchecked(email),
        })
        .collect())
}
