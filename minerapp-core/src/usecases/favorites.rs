use super::prelude::*;

/// Adds a place to the favorites of a user.
///
/// Returns the favorite and whether it has been newly created.
/// Adding the same place twice returns the existing favorite.
pub fn add_favorite<R>(repo: &R, user_id: &Id, place_id: &str) -> Result<(Favorite, bool)>
where
    R: PlaceRepo + FavoriteRepo,
{
    let place = repo
        .get_place(place_id)
        .or_not_found(Error::PlaceNotFound)?;
    if let Some(favorite) = repo.try_get_favorite(user_id.as_str(), place.id.as_str())? {
        return Ok((favorite, false));
    }
    let favorite = Favorite {
        id: Id::new(),
        user_id: user_id.clone(),
        place_id: place.id,
        created_at: Timestamp::now(),
    };
    match repo.create_favorite(&favorite) {
        Ok(()) => {}
        Err(crate::repositories::Error::AlreadyExists) => {
            let existing = repo
                .try_get_favorite(user_id.as_str(), favorite.place_id.as_str())?
                .ok_or(crate::repositories::Error::NotFound)?;
            return Ok((existing, false));
        }
        Err(err) => return Err(err.into()),
    }
    repo.add_place_likes(favorite.place_id.as_str(), 1)?;
    Ok((favorite, true))
}

/// Removes a place from the favorites of a user.
///
/// Returns `false` if the place was not a favorite.
pub fn remove_favorite<R>(repo: &R, user_id: &Id, place_id: &str) -> Result<bool>
where
    R: PlaceRepo + FavoriteRepo,
{
    let removed = repo.delete_favorite(user_id.as_str(), place_id)?;
    if removed {
        match repo.add_place_likes(place_id, -1) {
            Ok(()) | Err(crate::repositories::Error::NotFound) => {}
            Err(err) => return Err(err.into()),
        }
    }
    Ok(removed)
}

pub fn favorite_place_ids<R: FavoriteRepo>(repo: &R, user_id: &Id) -> Result<Vec<Id>> {
    Ok(repo.favorite_place_ids_of_user(user_id.as_str())?)
}

/// The favorite places of a user, most recently added first.
pub fn favorite_places<R>(repo: &R, user_id: &Id) -> Result<Vec<Place>>
where
    R: PlaceRepo + FavoriteRepo,
{
    let ids = repo.favorite_place_ids_of_user(user_id.as_str())?;
    let ids: Vec<_> = ids.iter().map(Id::as_str).collect();
    let mut places = repo.get_places(&ids)?;
    places.sort_by_key(|p| ids.iter().position(|id| *id == p.id.as_str()));
    Ok(places)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use minerapp_entities::builders::*;

    fn setup() -> (MockDb, Id, Place) {
        let db = MockDb::default();
        let user = User::build().name("Ana").finish();
        let place = Place::build().name("Mina").likes(10).finish();
        db.users.borrow_mut().push(user.clone());
        db.places.borrow_mut().push(place.clone());
        (db, user.id, place)
    }

    #[test]
    fn add_twice() {
        let (db, user_id, place) = setup();
        let (f1, created) = add_favorite(&db, &user_id, place.id.as_str()).unwrap();
        assert!(created);
        let (f2, created) = add_favorite(&db, &user_id, place.id.as_str()).unwrap();
        assert!(!created);
        assert_eq!(f1, f2);
        assert_eq!(1, db.favorites.borrow().len());
        assert_eq!(11, db.places.borrow()[0].likes);
    }

    #[test]
    fn add_missing_place() {
        let (db, user_id, _) = setup();
        assert!(matches!(
            add_favorite(&db, &user_id, "missing"),
            Err(Error::PlaceNotFound)
        ));
    }

    #[test]
    fn remove_non_existing_favorite() {
        let (db, user_id, place) = setup();
        assert!(!remove_favorite(&db, &user_id, place.id.as_str()).unwrap());
        assert_eq!(10, db.places.borrow()[0].likes);
    }

    #[test]
    fn remove_existing_favorite() {
        let (db, user_id, place) = setup();
        add_favorite(&db, &user_id, place.id.as_str()).unwrap();
        assert!(remove_favorite(&db, &user_id, place.id.as_str()).unwrap());
        assert!(db.favorites.borrow().is_empty());
        assert_eq!(10, db.places.borrow()[0].likes);
    }

    #[test]
    fn list_favorite_places() {
        let (db, user_id, place) = setup();
        let other = Place::build().name("Museo").finish();
        db.places.borrow_mut().push(other.clone());
        add_favorite(&db, &user_id, place.id.as_str()).unwrap();
        add_favorite(&db, &user_id, other.id.as_str()).unwrap();
        let places = favorite_places(&db, &user_id).unwrap();
        assert_eq!(2, places.len());
        assert_eq!(
            vec![other.id.clone(), place.id.clone()],
            favorite_place_ids(&db, &user_id).unwrap()
        );
    }
}
