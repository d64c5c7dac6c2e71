use serde::{Deserialize, Deserializer, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Message {
    pub message: String,
}

impl From<&str> for Message {
    fn from(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id               : String,
    pub nombre           : String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub descripcion      : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub categoria        : Option<String>,
    pub tags             : Vec<String>,
    pub images           : Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub location         : Option<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub google_maps_link : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub creado_por       : Option<String>,
    pub visitas          : u64,
    pub likes            : u64,
    pub activo           : bool,
    pub destacado        : bool,
    pub created_at       : i64,
    pub updated_at       : i64,
}

/// A place as seen by a visitor of the public site.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct PlaceWithFavorites {
    #[serde(flatten)]
    pub place: Place,
    pub favorites_count: u64,
    /// The names of the most recent users
    pub favorite_users: Vec<String>,
    pub is_favorite: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PlaceList<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PlaceResponse {
    pub message: String,
    pub lugar: Place,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct PlaceRef {
    pub id: String,
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub categoria: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct UserRef {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub nombre: String,
    pub slug: String,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Default))]
pub struct NewCategory {
    #[serde(default)]
    pub nombre: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id         : String,
    pub rating     : u8,
    /// Empty if there is no comment
    pub comment    : String,
    pub created_at : i64,
    pub updated_at : i64,
    pub lugar      : Option<PlaceRef>,
    pub user       : Option<UserRef>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct RatingCount {
    pub rating: u8,
    pub count: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct ReviewList {
    pub data: Vec<Review>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub rating_summary: Vec<RatingCount>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ReviewMeta {
    pub lugares: Vec<PlaceRef>,
    pub usuarios: Vec<UserRef>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct ReviewDeleted {
    pub deleted: bool,
    pub review_id: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ReviewResponse {
    pub message: String,
    pub review: Review,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Default))]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    #[serde(default)]
    pub lugar_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_rating")]
    pub rating: Option<i64>,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Default))]
pub struct ReviewChanges {
    #[serde(default, deserialize_with = "deserialize_rating")]
    pub rating: Option<i64>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Ratings are sent either as JSON numbers or, by form based
/// clients, as strings containing an integer.
fn deserialize_rating<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Rating {
        Integer(i64),
        Text(String),
    }
    match Option::<Rating>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Rating::Integer(rating)) => Ok(Some(rating)),
        Some(Rating::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid rating: {text}"))),
    }
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: String,
    pub lugar_id: String,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct FavoriteResponse {
    pub message: String,
    pub favorite: Favorite,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

// Missing fields are reported by the use cases
// with a localized message.

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Default))]
pub struct NewAdmin {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Default))]
pub struct AdminCredentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Default))]
pub struct NewUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Default))]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct UserLogin {
    pub message: String,
    pub redirect_to: String,
    pub user: User,
    pub favorite_ids: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: User,
    pub favorite_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_place_with_camel_case_keys() {
        let place = Place {
            id: "x".into(),
            nombre: "Mina de Acosta".into(),
            descripcion: None,
            categoria: Some("Historia".into()),
            tags: vec![],
            images: vec![],
            location: None,
            google_maps_link: Some("https://maps.app.goo.gl/abc".into()),
            creado_por: None,
            visitas: 3,
            likes: 1,
            activo: true,
            destacado: false,
            created_at: 1000,
            updated_at: 2000,
        };
        let json = serde_json::to_value(PlaceWithFavorites {
            place,
            favorites_count: 1,
            favorite_users: vec!["Ana".into()],
            is_favorite: false,
        })
        .unwrap();
        assert_eq!(json["nombre"], "Mina de Acosta");
        assert_eq!(json["googleMapsLink"], "https://maps.app.goo.gl/abc");
        assert_eq!(json["createdAt"], 1000);
        assert_eq!(json["favoritesCount"], 1);
        assert_eq!(json["favoriteUsers"][0], "Ana");
        assert!(json.get("descripcion").is_none());
    }

    #[test]
    fn deserialize_incomplete_review() {
        let review: NewReview = serde_json::from_str(r#"{"lugarId":"abc"}"#).unwrap();
        assert_eq!(Some("abc"), review.lugar_id.as_deref());
        assert_eq!(None, review.rating);
        let review: NewReview = serde_json::from_str("{}").unwrap();
        assert!(review.lugar_id.is_none());
        let review: NewReview = serde_json::from_str(r#"{"rating":null}"#).unwrap();
        assert_eq!(None, review.rating);
    }

    #[test]
    fn deserialize_rating_from_number_or_string() {
        let review: NewReview = serde_json::from_str(r#"{"rating":4}"#).unwrap();
        assert_eq!(Some(4), review.rating);
        let review: NewReview = serde_json::from_str(r#"{"rating":"6"}"#).unwrap();
        assert_eq!(Some(6), review.rating);
        let changes: ReviewChanges = serde_json::from_str(r#"{"rating":" 2 "}"#).unwrap();
        assert_eq!(Some(2), changes.rating);
        assert!(serde_json::from_str::<NewReview>(r#"{"rating":"five"}"#).is_err());
        assert!(serde_json::from_str::<NewReview>(r#"{"rating":4.5}"#).is_err());
    }
}
