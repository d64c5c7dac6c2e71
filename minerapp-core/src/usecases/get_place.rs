use super::prelude::*;

pub fn get_place<R: PlaceRepo>(repo: &R, id: &str) -> Result<Place> {
    repo.get_place(id).or_not_found(Error::PlaceNotFound)
}

/// Loads a place for a visitor and counts the visit.
pub fn visit_place<R: PlaceRepo>(repo: &R, id: &str) -> Result<Place> {
    repo.increment_place_visits(id)
        .or_not_found(Error::PlaceNotFound)?;
    get_place(repo, id)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use minerapp_entities::builders::*;

    #[test]
    fn count_visits() {
        let db = MockDb::default();
        let place = Place::build().name("Mina").visits(41).finish();
        db.places.borrow_mut().push(place.clone());
        assert_eq!(42, visit_place(&db, place.id.as_str()).unwrap().visits);
        assert_eq!(42, get_place(&db, place.id.as_str()).unwrap().visits);
    }

    #[test]
    fn visit_missing_place() {
        let db = MockDb::default();
        assert!(matches!(
            visit_place(&db, "nope"),
            Err(Error::PlaceNotFound)
        ));
    }
}
