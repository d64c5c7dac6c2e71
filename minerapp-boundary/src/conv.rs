use super::*;
use minerapp_entities as e;

impl From<e::location::Location> for Coordinate {
    fn from(from: e::location::Location) -> Self {
        let e::location::Location { lat, lng } = from;
        Self { lat, lng }
    }
}

impl From<e::place::Place> for Place {
    fn from(from: e::place::Place) -> Self {
        let e::place::Place {
            id,
            name,
            description,
            category,
            tags,
            images,
            location,
            map_link,
            created_by,
            visits,
            likes,
            active,
            featured,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            nombre: name,
            descripcion: description,
            categoria: category,
            tags,
            images,
            location: location.map(Into::into),
            google_maps_link: map_link.map(|url| url.to_string()),
            creado_por: created_by.map(Into::into),
            visitas: visits,
            likes,
            activo: active,
            destacado: featured,
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
        }
    }
}

impl From<(e::place::Place, e::favorite::FavoriteSummary)> for PlaceWithFavorites {
    fn from((place, favorites): (e::place::Place, e::favorite::FavoriteSummary)) -> Self {
        let e::favorite::FavoriteSummary {
            count,
            sample_users,
            is_favorite,
        } = favorites;
        Self {
            place: place.into(),
            favorites_count: count,
            favorite_users: sample_users,
            is_favorite,
        }
    }
}

impl From<e::place::PlaceRef> for PlaceRef {
    fn from(from: e::place::PlaceRef) -> Self {
        let e::place::PlaceRef { id, name, category } = from;
        Self {
            id: id.into(),
            nombre: name,
            categoria: category,
        }
    }
}

impl From<e::user::UserRef> for UserRef {
    fn from(from: e::user::UserRef) -> Self {
        let e::user::UserRef { id, name, email } = from;
        Self {
            id: id.into(),
            name,
            email: email.into_string(),
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id, name, email, ..
        } = from;
        Self {
            id: id.into(),
            name,
            email: email.into_string(),
        }
    }
}

impl From<e::category::Category> for Category {
    fn from(from: e::category::Category) -> Self {
        let e::category::Category {
            id,
            name,
            slug,
            created_at,
        } = from;
        Self {
            id: id.into(),
            nombre: name,
            slug,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::review::ReviewWithRefs> for Review {
    fn from(from: e::review::ReviewWithRefs) -> Self {
        let e::review::ReviewWithRefs {
            review,
            user,
            place,
        } = from;
        let e::review::Review {
            id,
            rating,
            comment,
            created_at,
            updated_at,
            ..
        } = review;
        Self {
            id: id.into(),
            rating: rating.get(),
            comment: comment.unwrap_or_default(),
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
            lugar: place.map(Into::into),
            user: user.map(Into::into),
        }
    }
}

impl From<e::review::RatingCount> for RatingCount {
    fn from(from: e::review::RatingCount) -> Self {
        Self {
            rating: from.rating.get(),
            count: from.count,
        }
    }
}

impl From<e::favorite::Favorite> for Favorite {
    fn from(from: e::favorite::Favorite) -> Self {
        let e::favorite::Favorite {
            id,
            place_id,
            created_at,
            ..
        } = from;
        Self {
            id: id.into(),
            lugar_id: place_id.into(),
            created_at: created_at.as_millis(),
        }
    }
}
