use super::*;

macro_rules! impl_category_repo {
    ($db:ty) => {
        impl CategoryRepo for $db {
            fn create_category(&self, category: &Category) -> Result<()> {
                create_category(&mut *self.write_conn()?, category)
            }
            fn update_category(&self, category: &Category) -> Result<()> {
                update_category(&mut *self.write_conn()?, category)
            }
            fn delete_category(&self, id: &str) -> Result<()> {
                delete_category(&mut *self.write_conn()?, id)
            }

            fn get_category(&self, id: &str) -> Result<Category> {
                get_category(&mut self.read_conn(), id)
            }
            fn all_categories(&self) -> Result<Vec<Category>> {
                all_categories(&mut self.read_conn())
            }
        }
    };
}

impl_for_connections!(impl_category_repo);

impl From<models::CategoryEntity> for Category {
    fn from(from: models::CategoryEntity) -> Self {
        let models::CategoryEntity {
            rowid: _,
            id,
            name,
            slug,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            slug,
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

fn new_category(category: &Category) -> models::NewCategory<'_> {
    models::NewCategory {
        id: category.id.as_str(),
        name: &category.name,
        slug: &category.slug,
        created_at: category.created_at.as_millis(),
    }
}

fn create_category(conn: &mut SqliteConnection, category: &Category) -> Result<()> {
    diesel::insert_into(schema::categories::table)
        .values(&new_category(category))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_category(conn: &mut SqliteConnection, category: &Category) -> Result<()> {
    use schema::categories::dsl;
    let count = diesel::update(schema::categories::table.filter(dsl::id.eq(category.id.as_str())))
        .set(&new_category(category))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn delete_category(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::categories::dsl;
    let count = diesel::delete(schema::categories::table.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn get_category(conn: &mut SqliteConnection, id: &str) -> Result<Category> {
    use schema::categories::dsl;
    Ok(schema::categories::table
        .filter(dsl::id.eq(id))
        .first::<models::CategoryEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_categories(conn: &mut SqliteConnection) -> Result<Vec<Category>> {
    use schema::categories::dsl;
    Ok(schema::categories::table
        .order_by(dsl::name)
        .load::<models::CategoryEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
