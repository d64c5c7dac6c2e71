#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = admins)]
pub struct NewAdmin<'a> {
    pub id: &'a str,
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct AdminEntity {
    pub rowid: i64,
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = categories)]
pub struct NewCategory<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub slug: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct CategoryEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub slug: String,
    pub created_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = places)]
#[diesel(treat_none_as_null = true)]
pub struct NewPlace<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub category: Option<&'a str>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub map_link: Option<&'a str>,
    pub created_by: Option<&'a str>,
    pub visits: i64,
    pub likes: i64,
    pub active: bool,
    pub featured: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct PlaceEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub map_link: Option<String>,
    pub created_by: Option<String>,
    pub visits: i64,
    pub likes: i64,
    pub active: bool,
    pub featured: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = place_tags)]
pub struct NewPlaceTag<'a> {
    pub parent_rowid: i64,
    pub position: i64,
    pub tag: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = place_images)]
pub struct NewPlaceImage<'a> {
    pub parent_rowid: i64,
    pub position: i64,
    pub path: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = reviews)]
pub struct NewReview<'a> {
    pub id: &'a str,
    pub user_rowid: i64,
    pub place_rowid: i64,
    pub rating: i16,
    pub comment: &'a str,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct JoinedReview {
    pub id: String,
    pub rating: i16,
    pub comment: String,
    pub created_at: i64,
    pub updated_at: i64,
    // Joined columns
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub place_id: String,
    pub place_name: String,
    pub place_category: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = favorites)]
pub struct NewFavorite<'a> {
    pub id: &'a str,
    pub user_rowid: i64,
    pub place_rowid: i64,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct JoinedFavorite {
    pub id: String,
    pub created_at: i64,
    // Joined columns
    pub user_id: String,
    pub place_id: String,
}
