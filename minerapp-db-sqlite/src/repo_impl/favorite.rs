use super::*;

macro_rules! impl_favorite_repo {
    ($db:ty) => {
        impl FavoriteRepo for $db {
            fn create_favorite(&self, favorite: &Favorite) -> Result<()> {
                create_favorite(&mut *self.write_conn()?, favorite)
            }
            fn delete_favorite(&self, user_id: &str, place_id: &str) -> Result<bool> {
                delete_favorite(&mut *self.write_conn()?, user_id, place_id)
            }

            fn try_get_favorite(&self, user_id: &str, place_id: &str) -> Result<Option<Favorite>> {
                try_get_favorite(&mut self.read_conn(), user_id, place_id)
            }
            fn favorite_place_ids_of_user(&self, user_id: &str) -> Result<Vec<Id>> {
                favorite_place_ids_of_user(&mut self.read_conn(), user_id)
            }

            fn summarize_favorites(
                &self,
                place_ids: &[&str],
                viewer_id: Option<&str>,
            ) -> Result<Vec<(Id, FavoriteSummary)>> {
                summarize_favorites(&mut self.read_conn(), place_ids, viewer_id)
            }
        }
    };
}

impl_for_connections!(impl_favorite_repo);

impl From<models::JoinedFavorite> for Favorite {
    fn from(from: models::JoinedFavorite) -> Self {
        let models::JoinedFavorite {
            id,
            created_at,
            user_id,
            place_id,
        } = from;
        Self {
            id: id.into(),
            user_id: user_id.into(),
            place_id: place_id.into(),
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

fn create_favorite(conn: &mut SqliteConnection, favorite: &Favorite) -> Result<()> {
    let user_rowid = resolve_user_rowid(conn, favorite.user_id.as_str())?;
    let place_rowid = resolve_place_rowid(conn, favorite.place_id.as_str())?;
    let new_favorite = models::NewFavorite {
        id: favorite.id.as_str(),
        user_rowid,
        place_rowid,
        created_at: favorite.created_at.as_millis(),
    };
    diesel::insert_into(schema::favorites::table)
        .values(&new_favorite)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_favorite(conn: &mut SqliteConnection, user_id: &str, place_id: &str) -> Result<bool> {
    use schema::favorites::dsl;
    let count = diesel::delete(
        schema::favorites::table
            .filter(
                dsl::user_rowid.eq_any(
                    schema::users::table
                        .select(schema::users::rowid)
                        .filter(schema::users::id.eq(user_id)),
                ),
            )
            .filter(
                dsl::place_rowid.eq_any(
                    schema::places::table
                        .select(schema::places::rowid)
                        .filter(schema::places::id.eq(place_id)),
                ),
            ),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    Ok(count > 0)
}

fn try_get_favorite(
    conn: &mut SqliteConnection,
    user_id: &str,
    place_id: &str,
) -> Result<Option<Favorite>> {
    use schema::favorites::dsl;
    Ok(schema::favorites::table
        .inner_join(schema::users::table)
        .inner_join(schema::places::table)
        .select((
            dsl::id,
            dsl::created_at,
            schema::users::id,
            schema::places::id,
        ))
        .filter(schema::users::id.eq(user_id))
        .filter(schema::places::id.eq(place_id))
        .first::<models::JoinedFavorite>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn favorite_place_ids_of_user(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<Id>> {
    use schema::favorites::dsl;
    Ok(schema::favorites::table
        .inner_join(schema::users::table)
        .inner_join(schema::places::table)
        .select(schema::places::id)
        .filter(schema::users::id.eq(user_id))
        .order_by(dsl::created_at.desc())
        .then_order_by(dsl::rowid.desc())
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Id::from)
        .collect())
}

fn summarize_favorites(
    conn: &mut SqliteConnection,
    place_ids: &[&str],
    viewer_id: Option<&str>,
) -> Result<Vec<(Id, FavoriteSummary)>> {
    use schema::favorites::dsl;
    if place_ids.is_empty() {
        return Ok(vec![]);
    }
    let rows = schema::favorites::table
        .inner_join(schema::users::table)
        .inner_join(schema::places::table)
        .select((schema::places::id, schema::users::id, schema::users::name))
        .filter(schema::places::id.eq_any(place_ids))
        .order_by(dsl::created_at.desc())
        .then_order_by(dsl::rowid.desc())
        .load::<(String, String, String)>(conn)
        .map_err(from_diesel_err)?;
    let mut summaries: Vec<(Id, FavoriteSummary)> = vec![];
    for (place_id, user_id, user_name) in rows {
        let index = match summaries.iter().position(|(id, _)| id.as_str() == place_id) {
            Some(index) => index,
            None => {
                summaries.push((place_id.into(), FavoriteSummary::default()));
                summaries.len() - 1
            }
        };
        let summary = &mut summaries[index].1;
        summary.count += 1;
        if summary.sample_users.len() < FavoriteSummary::MAX_SAMPLE_USERS {
            summary.sample_users.push(user_name);
        }
        if viewer_id == Some(user_id.as_str()) {
            summary.is_favorite = true;
        }
    }
    Ok(summaries)
}
