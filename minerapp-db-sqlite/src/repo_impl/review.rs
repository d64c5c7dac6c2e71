use std::collections::BTreeMap;

use minerapp_core::util::query::{ReviewQuery, ReviewSortField, SortDirection};

use super::*;

macro_rules! impl_review_repo {
    ($db:ty) => {
        impl ReviewRepo for $db {
            fn create_review(&self, review: &Review) -> Result<()> {
                create_review(&mut *self.write_conn()?, review)
            }
            fn update_review(&self, review: &Review) -> Result<()> {
                update_review(&mut *self.write_conn()?, review)
            }
            fn delete_review(&self, id: &str) -> Result<()> {
                delete_review(&mut *self.write_conn()?, id)
            }

            fn get_review(&self, id: &str) -> Result<Review> {
                get_review(&mut self.read_conn(), id)
            }
            fn try_get_review_of_user_and_place(
                &self,
                user_id: &str,
                place_id: &str,
            ) -> Result<Option<Review>> {
                try_get_review_of_user_and_place(&mut self.read_conn(), user_id, place_id)
            }

            fn query_reviews(
                &self,
                query: &ReviewQuery,
                pagination: &Pagination,
            ) -> Result<Vec<ReviewWithRefs>> {
                query_reviews(&mut self.read_conn(), query, pagination)
            }
            fn count_reviews(&self, query: &ReviewQuery) -> Result<u64> {
                count_reviews(&mut self.read_conn(), query)
            }
            fn summarize_review_ratings(&self, query: &ReviewQuery) -> Result<Vec<RatingCount>> {
                summarize_review_ratings(&mut self.read_conn(), query)
            }
        }
    };
}

impl_for_connections!(impl_review_repo);

// Reviews joined with their users and places
macro_rules! joined_reviews {
    () => {
        schema::reviews::table
            .inner_join(schema::users::table)
            .inner_join(schema::places::table)
    };
}

macro_rules! joined_review_columns {
    () => {
        (
            schema::reviews::id,
            schema::reviews::rating,
            schema::reviews::comment,
            schema::reviews::created_at,
            schema::reviews::updated_at,
            schema::users::id,
            schema::users::name,
            schema::users::email,
            schema::places::id,
            schema::places::name,
            schema::places::category,
        )
    };
}

// Applies all filters of a `ReviewQuery` to a boxed query of `joined_reviews!()`
macro_rules! filter_reviews {
    ($boxed_query:expr, $query:expr) => {{
        use schema::{places::dsl as p_dsl, reviews::dsl as r_dsl, users::dsl as u_dsl};
        let ReviewQuery {
            rating,
            place_id,
            user_id,
            text,
            sort: _,
        } = $query;
        let mut boxed_query = $boxed_query;
        if let Some(rating) = rating {
            // Values outside of the column's range still match nothing
            let rating = (*rating).clamp(i64::from(i16::MIN), i64::from(i16::MAX)) as i16;
            boxed_query = boxed_query.filter(r_dsl::rating.eq(rating));
        }
        if let Some(place_id) = place_id {
            boxed_query = boxed_query.filter(p_dsl::id.eq(place_id.as_str().to_owned()));
        }
        if let Some(user_id) = user_id {
            boxed_query = boxed_query.filter(u_dsl::id.eq(user_id.as_str().to_owned()));
        }
        if let Some(text) = text {
            let pattern = like_pattern(text);
            boxed_query = boxed_query.filter(
                unicode_lower(r_dsl::comment.nullable())
                    .like(pattern.clone())
                    .escape(LIKE_ESCAPE_CHAR)
                    .or(unicode_lower(u_dsl::name.nullable())
                        .like(pattern.clone())
                        .escape(LIKE_ESCAPE_CHAR))
                    .or(unicode_lower(u_dsl::email.nullable())
                        .like(pattern.clone())
                        .escape(LIKE_ESCAPE_CHAR))
                    .or(unicode_lower(p_dsl::name.nullable())
                        .like(pattern.clone())
                        .escape(LIKE_ESCAPE_CHAR))
                    .or(unicode_lower(p_dsl::category)
                        .like(pattern)
                        .escape(LIKE_ESCAPE_CHAR)),
            );
        }
        boxed_query
    }};
}

fn load_review(joined: models::JoinedReview) -> Result<ReviewWithRefs> {
    let models::JoinedReview {
        id,
        rating,
        comment,
        created_at,
        updated_at,
        user_id,
        user_name,
        user_email,
        place_id,
        place_name,
        place_category,
    } = joined;
    let review = Review {
        id: id.into(),
        user_id: user_id.as_str().into(),
        place_id: place_id.as_str().into(),
        rating: load_rating(rating)?,
        comment: load_comment(comment),
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    };
    let user = UserRef {
        id: user_id.into(),
        name: user_name,
        email: EmailAddress::new_unchecked(user_email),
    };
    let place = PlaceRef {
        id: place_id.into(),
        name: place_name,
        category: place_category,
    };
    Ok(ReviewWithRefs {
        review,
        user: Some(user),
        place: Some(place),
    })
}

fn create_review(conn: &mut SqliteConnection, review: &Review) -> Result<()> {
    let user_rowid = resolve_user_rowid(conn, review.user_id.as_str())?;
    let place_rowid = resolve_place_rowid(conn, review.place_id.as_str())?;
    let new_review = models::NewReview {
        id: review.id.as_str(),
        user_rowid,
        place_rowid,
        rating: i16::from(u8::from(review.rating)),
        comment: review.comment.as_deref().unwrap_or_default(),
        created_at: review.created_at.as_millis(),
        updated_at: review.updated_at.as_millis(),
    };
    diesel::insert_into(schema::reviews::table)
        .values(&new_review)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

// Only the rating, the comment and the modification time can be changed.
fn update_review(conn: &mut SqliteConnection, review: &Review) -> Result<()> {
    use schema::reviews::dsl;
    let count = diesel::update(schema::reviews::table.filter(dsl::id.eq(review.id.as_str())))
        .set((
            dsl::rating.eq(i16::from(u8::from(review.rating))),
            dsl::comment.eq(review.comment.as_deref().unwrap_or_default()),
            dsl::updated_at.eq(review.updated_at.as_millis()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn delete_review(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::reviews::dsl;
    let count = diesel::delete(schema::reviews::table.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn get_review(conn: &mut SqliteConnection, id: &str) -> Result<Review> {
    let joined = joined_reviews!()
        .select(joined_review_columns!())
        .filter(schema::reviews::id.eq(id))
        .first::<models::JoinedReview>(conn)
        .map_err(from_diesel_err)?;
    Ok(load_review(joined)?.review)
}

fn try_get_review_of_user_and_place(
    conn: &mut SqliteConnection,
    user_id: &str,
    place_id: &str,
) -> Result<Option<Review>> {
    joined_reviews!()
        .select(joined_review_columns!())
        .filter(schema::users::id.eq(user_id))
        .filter(schema::places::id.eq(place_id))
        .first::<models::JoinedReview>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(|joined| load_review(joined).map(|r| r.review))
        .transpose()
}

fn query_reviews(
    conn: &mut SqliteConnection,
    query: &ReviewQuery,
    pagination: &Pagination,
) -> Result<Vec<ReviewWithRefs>> {
    use schema::reviews::dsl;
    use ReviewSortField as F;
    let boxed_query = filter_reviews!(
        joined_reviews!()
            .select(joined_review_columns!())
            .into_boxed::<diesel::sqlite::Sqlite>(),
        query
    );
    // Equal values are ordered by insertion in the same direction
    let boxed_query = match query.sort.direction {
        SortDirection::Asc => match query.sort.field {
            F::CreatedAt => boxed_query.order_by(dsl::created_at.asc()),
            F::UpdatedAt => boxed_query.order_by(dsl::updated_at.asc()),
            F::Rating => boxed_query.order_by(dsl::rating.asc()),
        }
        .then_order_by(dsl::rowid.asc()),
        SortDirection::Desc => match query.sort.field {
            F::CreatedAt => boxed_query.order_by(dsl::created_at.desc()),
            F::UpdatedAt => boxed_query.order_by(dsl::updated_at.desc()),
            F::Rating => boxed_query.order_by(dsl::rating.desc()),
        }
        .then_order_by(dsl::rowid.desc()),
    };
    let (offset, limit) = pagination_bounds(pagination);
    boxed_query
        .offset(offset)
        .limit(limit)
        .load::<models::JoinedReview>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_review)
        .collect()
}

fn count_reviews(conn: &mut SqliteConnection, query: &ReviewQuery) -> Result<u64> {
    let count = filter_reviews!(
        joined_reviews!()
            .select(diesel::dsl::count_star())
            .into_boxed::<diesel::sqlite::Sqlite>(),
        query
    )
    .get_result::<i64>(conn)
    .map_err(from_diesel_err)?;
    Ok(count as u64)
}

fn summarize_review_ratings(
    conn: &mut SqliteConnection,
    query: &ReviewQuery,
) -> Result<Vec<RatingCount>> {
    let ratings = filter_reviews!(
        joined_reviews!()
            .select(schema::reviews::rating)
            .into_boxed::<diesel::sqlite::Sqlite>(),
        query
    )
    .load::<i16>(conn)
    .map_err(from_diesel_err)?;
    let mut counts = BTreeMap::<RatingValue, u64>::new();
    for rating in ratings {
        *counts.entry(load_rating(rating)?).or_default() += 1;
    }
    Ok(counts
        .into_iter()
        .rev()
        .map(|(rating, count)| RatingCount { rating, count })
        .collect())
}
