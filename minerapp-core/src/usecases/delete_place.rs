use super::prelude::*;

/// Deletes a place and returns it, so that the caller
/// can clean up the attached image files afterwards.
pub fn delete_place<R: PlaceRepo>(repo: &R, id: &str) -> Result<Place> {
    let place = repo.get_place(id).or_not_found(Error::PlaceNotFound)?;
    repo.delete_place(id).or_not_found(Error::PlaceNotFound)?;
    log::debug!("Deleted place {}", place.id);
    Ok(place)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use minerapp_entities::builders::*;

    #[test]
    fn delete_twice() {
        let db = MockDb::default();
        let place = Place::build().name("Mina").finish();
        db.places.borrow_mut().push(place.clone());
        assert_eq!(place, delete_place(&db, place.id.as_str()).unwrap());
        assert!(db.places.borrow().is_empty());
        assert!(matches!(
            delete_place(&db, place.id.as_str()),
            Err(Error::PlaceNotFound)
        ));
    }
}
