use std::collections::HashMap;

use diesel::sqlite::Sqlite;
use minerapp_core::util::query::{PlaceQuery, PlaceSort, PlaceSortField, SortDirection};

use super::*;

macro_rules! impl_place_repo {
    ($db:ty) => {
        impl PlaceRepo for $db {
            fn create_place(&self, place: &Place) -> Result<()> {
                create_place(&mut *self.write_conn()?, place)
            }
            fn update_place(&self, place: &Place) -> Result<()> {
                update_place(&mut *self.write_conn()?, place)
            }
            fn delete_place(&self, id: &str) -> Result<()> {
                delete_place(&mut *self.write_conn()?, id)
            }

            fn get_place(&self, id: &str) -> Result<Place> {
                get_place(&mut self.read_conn(), id)
            }
            fn get_places(&self, ids: &[&str]) -> Result<Vec<Place>> {
                get_places(&mut self.read_conn(), ids)
            }

            fn query_places(&self, query: &PlaceQuery, pagination: &Pagination) -> Result<Vec<Place>> {
                query_places(&mut self.read_conn(), query, pagination)
            }
            fn count_places(&self, query: &PlaceQuery) -> Result<u64> {
                count_places(&mut self.read_conn(), query)
            }

            fn increment_place_visits(&self, id: &str) -> Result<()> {
                increment_place_visits(&mut *self.write_conn()?, id)
            }
            fn add_place_likes(&self, id: &str, delta: i64) -> Result<()> {
                add_place_likes(&mut *self.write_conn()?, id, delta)
            }

            fn list_place_refs(&self, pagination: &Pagination) -> Result<Vec<PlaceRef>> {
                list_place_refs(&mut self.read_conn(), pagination)
            }
        }
    };
}

impl_for_connections!(impl_place_repo);

fn new_place(place: &Place) -> models::NewPlace<'_> {
    let Place {
        id,
        name,
        description,
        category,
        tags: _,
        images: _,
        location,
        map_link,
        created_by,
        visits,
        likes,
        active,
        featured,
        created_at,
        updated_at,
    } = place;
    models::NewPlace {
        id: id.as_str(),
        name,
        description: description.as_deref(),
        category: category.as_deref(),
        lat: location.map(|l| l.lat),
        lng: location.map(|l| l.lng),
        map_link: map_link.as_ref().map(Url::as_str),
        created_by: created_by.as_ref().map(Id::as_str),
        visits: *visits as i64,
        likes: *likes as i64,
        active: *active,
        featured: *featured,
        created_at: created_at.as_millis(),
        updated_at: updated_at.as_millis(),
    }
}

fn load_place(entity: models::PlaceEntity, tags: Vec<String>, images: Vec<String>) -> Place {
    let models::PlaceEntity {
        rowid: _,
        id,
        name,
        description,
        category,
        lat,
        lng,
        map_link,
        created_by,
        visits,
        likes,
        active,
        featured,
        created_at,
        updated_at,
    } = entity;
    let location = match (lat, lng) {
        (Some(lat), Some(lng)) => Some(Location { lat, lng }),
        _ => None,
    };
    Place {
        id: id.into(),
        name,
        description,
        category,
        tags,
        images,
        location,
        map_link: map_link.and_then(load_url),
        created_by: created_by.map(Into::into),
        visits: visits.max(0) as u64,
        likes: likes.max(0) as u64,
        active,
        featured,
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    }
}

fn load_places(conn: &mut SqliteConnection, entities: Vec<models::PlaceEntity>) -> Result<Vec<Place>> {
    if entities.is_empty() {
        return Ok(vec![]);
    }
    let rowids: Vec<_> = entities.iter().map(|e| e.rowid).collect();
    let mut tags = {
        use schema::place_tags::dsl;
        let mut tags: HashMap<i64, Vec<String>> = HashMap::new();
        for (rowid, tag) in schema::place_tags::table
            .select((dsl::parent_rowid, dsl::tag))
            .filter(dsl::parent_rowid.eq_any(&rowids))
            .order_by((dsl::parent_rowid, dsl::position))
            .load::<(i64, String)>(conn)
            .map_err(from_diesel_err)?
        {
            tags.entry(rowid).or_default().push(tag);
        }
        tags
    };
    let mut images = {
        use schema::place_images::dsl;
        let mut images: HashMap<i64, Vec<String>> = HashMap::new();
        for (rowid, path) in schema::place_images::table
            .select((dsl::parent_rowid, dsl::path))
            .filter(dsl::parent_rowid.eq_any(&rowids))
            .order_by((dsl::parent_rowid, dsl::position))
            .load::<(i64, String)>(conn)
            .map_err(from_diesel_err)?
        {
            images.entry(rowid).or_default().push(path);
        }
        images
    };
    Ok(entities
        .into_iter()
        .map(|entity| {
            let tags = tags.remove(&entity.rowid).unwrap_or_default();
            let images = images.remove(&entity.rowid).unwrap_or_default();
            load_place(entity, tags, images)
        })
        .collect())
}

fn replace_place_tags_and_images(
    conn: &mut SqliteConnection,
    place_rowid: i64,
    place: &Place,
) -> Result<()> {
    {
        use schema::place_tags::dsl;
        diesel::delete(schema::place_tags::table.filter(dsl::parent_rowid.eq(place_rowid)))
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    {
        use schema::place_images::dsl;
        diesel::delete(schema::place_images::table.filter(dsl::parent_rowid.eq(place_rowid)))
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    let tags: Vec<_> = place
        .tags
        .iter()
        .enumerate()
        .map(|(position, tag)| models::NewPlaceTag {
            parent_rowid: place_rowid,
            position: position as i64,
            tag,
        })
        .collect();
    if !tags.is_empty() {
        diesel::insert_into(schema::place_tags::table)
            .values(&tags)
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    let images: Vec<_> = place
        .images
        .iter()
        .enumerate()
        .map(|(position, path)| models::NewPlaceImage {
            parent_rowid: place_rowid,
            position: position as i64,
            path,
        })
        .collect();
    if !images.is_empty() {
        diesel::insert_into(schema::place_images::table)
            .values(&images)
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    Ok(())
}

fn create_place(conn: &mut SqliteConnection, place: &Place) -> Result<()> {
    diesel::insert_into(schema::places::table)
        .values(&new_place(place))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let rowid = resolve_place_rowid(conn, place.id.as_str())?;
    replace_place_tags_and_images(conn, rowid, place)
}

fn update_place(conn: &mut SqliteConnection, place: &Place) -> Result<()> {
    let rowid = resolve_place_rowid(conn, place.id.as_str())?;
    {
        use schema::places::dsl;
        diesel::update(schema::places::table.filter(dsl::rowid.eq(rowid)))
            .set(&new_place(place))
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    replace_place_tags_and_images(conn, rowid, place)
}

// Tags, images, reviews and favorites are removed by
// cascading deletes.
fn delete_place(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::places::dsl;
    let count = diesel::delete(schema::places::table.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn get_place(conn: &mut SqliteConnection, id: &str) -> Result<Place> {
    use schema::places::dsl;
    let entity = schema::places::table
        .filter(dsl::id.eq(id))
        .first::<models::PlaceEntity>(conn)
        .map_err(from_diesel_err)?;
    let mut places = load_places(conn, vec![entity])?;
    places.pop().ok_or(repo::Error::NotFound)
}

fn get_places(conn: &mut SqliteConnection, ids: &[&str]) -> Result<Vec<Place>> {
    use schema::places::dsl;
    let entities = schema::places::table
        .filter(dsl::id.eq_any(ids))
        .load::<models::PlaceEntity>(conn)
        .map_err(from_diesel_err)?;
    load_places(conn, entities)
}

fn filtered_places(query: &PlaceQuery) -> schema::places::BoxedQuery<'static, Sqlite> {
    use schema::places::dsl;
    let PlaceQuery {
        text,
        category,
        tag,
        sort: _,
    } = query;
    let mut boxed_query = schema::places::table.into_boxed();
    if let Some(text) = text {
        let pattern = like_pattern(text);
        boxed_query = boxed_query.filter(
            unicode_lower(dsl::name.nullable())
                .like(pattern.clone())
                .escape(LIKE_ESCAPE_CHAR)
                .or(unicode_lower(dsl::description)
                    .like(pattern)
                    .escape(LIKE_ESCAPE_CHAR)),
        );
    }
    if let Some(category) = category {
        boxed_query = boxed_query.filter(
            unicode_lower(dsl::category)
                .like(like_pattern(category))
                .escape(LIKE_ESCAPE_CHAR),
        );
    }
    if let Some(tag) = tag {
        use schema::place_tags::dsl as tag_dsl;
        boxed_query = boxed_query.filter(
            dsl::rowid.eq_any(
                schema::place_tags::table
                    .select(tag_dsl::parent_rowid)
                    .filter(
                        unicode_lower(tag_dsl::tag.nullable())
                            .like(like_pattern(tag))
                            .escape(LIKE_ESCAPE_CHAR),
                    ),
            ),
        );
    }
    boxed_query
}

fn sorted_places(
    boxed_query: schema::places::BoxedQuery<'static, Sqlite>,
    sort: PlaceSort,
) -> schema::places::BoxedQuery<'static, Sqlite> {
    use schema::places::dsl;
    use PlaceSortField as F;
    // Equal values are ordered by insertion in the same direction
    match sort.direction {
        SortDirection::Asc => match sort.field {
            F::CreatedAt => boxed_query.order_by(dsl::created_at.asc()),
            F::UpdatedAt => boxed_query.order_by(dsl::updated_at.asc()),
            F::Name => boxed_query.order_by(dsl::name.asc()),
            F::Visits => boxed_query.order_by(dsl::visits.asc()),
            F::Likes => boxed_query.order_by(dsl::likes.asc()),
        }
        .then_order_by(dsl::rowid.asc()),
        SortDirection::Desc => match sort.field {
            F::CreatedAt => boxed_query.order_by(dsl::created_at.desc()),
            F::UpdatedAt => boxed_query.order_by(dsl::updated_at.desc()),
            F::Name => boxed_query.order_by(dsl::name.desc()),
            F::Visits => boxed_query.order_by(dsl::visits.desc()),
            F::Likes => boxed_query.order_by(dsl::likes.desc()),
        }
        .then_order_by(dsl::rowid.desc()),
    }
}

fn query_places(
    conn: &mut SqliteConnection,
    query: &PlaceQuery,
    pagination: &Pagination,
) -> Result<Vec<Place>> {
    let (offset, limit) = pagination_bounds(pagination);
    let entities = sorted_places(filtered_places(query), query.sort)
        .offset(offset)
        .limit(limit)
        .load::<models::PlaceEntity>(conn)
        .map_err(from_diesel_err)?;
    load_places(conn, entities)
}

fn count_places(conn: &mut SqliteConnection, query: &PlaceQuery) -> Result<u64> {
    let count = filtered_places(query)
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count as u64)
}

fn increment_place_visits(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::places::dsl;
    let count = diesel::update(schema::places::table.filter(dsl::id.eq(id)))
        .set(dsl::visits.eq(dsl::visits + 1))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn add_place_likes(conn: &mut SqliteConnection, id: &str, delta: i64) -> Result<()> {
    use schema::places::dsl;
    // Only a single writer is active at a time
    let likes = schema::places::table
        .select(dsl::likes)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    let likes = likes.saturating_add(delta).max(0);
    diesel::update(schema::places::table.filter(dsl::id.eq(id)))
        .set(dsl::likes.eq(likes))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn list_place_refs(conn: &mut SqliteConnection, pagination: &Pagination) -> Result<Vec<PlaceRef>> {
    use schema::places::dsl;
    let (offset, limit) = pagination_bounds(pagination);
    Ok(schema::places::table
        .select((dsl::id, dsl::name, dsl::category))
        .order_by(dsl::name)
        .then_order_by(dsl::rowid)
        .offset(offset)
        .limit(limit)
        .load::<(String, String, Option<String>)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|(id, name, category)| PlaceRef {
            id: id.into(),
            name,
            category,
        })
        .collect())
}
