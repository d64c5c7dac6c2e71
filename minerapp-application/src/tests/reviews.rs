use super::prelude::*;

fn new_review(place: &Place, rating: i64, comment: &str) -> usecases::NewReview {
    usecases::NewReview {
        place_id: Some(place.id.to_string()),
        rating: Some(rating),
        comment: Some(comment.into()),
    }
}

#[test]
fn submit_review_twice() {
    let fixture = BackendFixture::new();
    let place = fixture.create_place("Mina");
    let user = fixture.create_user("Ana");

    let (created, outcome) =
        flows::submit_review(&fixture.db_connections, &user.id, new_review(&place, 4, "Bien"))
            .unwrap();
    assert_eq!(usecases::ReviewOutcome::Created, outcome);
    assert_eq!("Ana", created.user.as_ref().unwrap().name);

    let (updated, outcome) = flows::submit_review(
        &fixture.db_connections,
        &user.id,
        new_review(&place, 5, "  Excelente "),
    )
    .unwrap();
    assert_eq!(usecases::ReviewOutcome::Updated, outcome);
    assert_eq!(created.review.id, updated.review.id);
    assert_eq!(Some("Excelente".to_string()), updated.review.comment);

    let db = fixture.db_connections.shared().unwrap();
    let query = minerapp_core::util::query::ReviewQuery::default();
    assert_eq!(1, db.count_reviews(&query).unwrap());
}

#[test]
fn reject_invalid_review_without_changes() {
    let fixture = BackendFixture::new();
    let place = fixture.create_place("Mina");
    let user = fixture.create_user("Ana");
    let err = flows::submit_review(&fixture.db_connections, &user.id, new_review(&place, 6, ""))
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::RatingValue))
    ));
    let err = flows::submit_review(
        &fixture.db_connections,
        &user.id,
        usecases::NewReview {
            place_id: Some(Id::new().to_string()),
            rating: Some(3),
            comment: None,
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::PlaceNotFound))
    ));
}

#[test]
fn manage_own_reviews() {
    let fixture = BackendFixture::new();
    let place = fixture.create_place("Mina");
    let ana = fixture.create_user("Ana");
    let bea = fixture.create_user("Bea");
    let (review, _) =
        flows::submit_review(&fixture.db_connections, &ana.id, new_review(&place, 3, "Regular"))
            .unwrap();
    let id = review.review.id.as_str();

    let err = flows::delete_own_review(&fixture.db_connections, &bea.id, id).unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::ReviewNotFound))
    ));
    let updated = flows::update_own_review(
        &fixture.db_connections,
        &ana.id,
        id,
        usecases::ReviewChanges {
            rating: Some(4),
            comment: Some(String::new()),
        },
    )
    .unwrap();
    assert_eq!(4, updated.review.rating.get());
    assert_eq!(None, updated.review.comment);

    flows::delete_own_review(&fixture.db_connections, &ana.id, id).unwrap();
    assert!(flows::moderate_review(&fixture.db_connections, id).is_err());
}

#[test]
fn moderate_reviews_of_any_user() {
    let fixture = BackendFixture::new();
    let place = fixture.create_place("Mina");
    let ana = fixture.create_user("Ana");
    let (review, _) =
        flows::submit_review(&fixture.db_connections, &ana.id, new_review(&place, 1, "Malo"))
            .unwrap();
    let deleted = flows::moderate_review(&fixture.db_connections, review.review.id.as_str()).unwrap();
    assert_eq!(review.review.id, deleted);
}
