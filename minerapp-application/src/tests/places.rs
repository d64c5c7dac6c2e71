use super::prelude::*;

#[test]
fn create_place_with_images() {
    let fixture = BackendFixture::new();
    let images = vec![fixture.store_image(), fixture.store_image()];
    let place = flows::create_place(
        &fixture.db_connections,
        &fixture.image_store,
        usecases::NewPlace {
            name: "  Mina de Acosta ".into(),
            tags: vec!["mina".into(), " mina".into(), "plata".into()],
            images: images.clone(),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!("Mina de Acosta", place.name);
    assert_eq!(vec!["mina", "plata"], place.tags);
    assert_eq!(images, fixture.get_place(place.id.as_str()).images);
}

#[test]
fn remove_stored_images_of_invalid_place() {
    let fixture = BackendFixture::new();
    let image = fixture.store_image();
    let err = flows::create_place(
        &fixture.db_connections,
        &fixture.image_store,
        usecases::NewPlace {
            name: " ".into(),
            images: vec![image.clone()],
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::PlaceName))
    ));
    assert!(!fixture.image_exists(&image));
}

#[test]
fn update_place_and_remove_detached_images() {
    let fixture = BackendFixture::new();
    let kept = fixture.store_image();
    let removed = fixture.store_image();
    let place = flows::create_place(
        &fixture.db_connections,
        &fixture.image_store,
        usecases::NewPlace {
            name: "Mina".into(),
            images: vec![kept.clone(), removed.clone()],
            location: Some(Location {
                lat: 20.1,
                lng: -98.7,
            }),
            ..Default::default()
        },
    )
    .unwrap();

    let added = fixture.store_image();
    let updated = flows::update_place(
        &fixture.db_connections,
        &fixture.image_store,
        place.id.as_str(),
        usecases::UpdatePlace {
            name: "Mina de Acosta".into(),
            new_images: vec![added.clone()],
            remove_images: vec![removed.clone()],
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(vec![kept.clone(), added.clone()], updated.images);
    assert_eq!(place.location, updated.location);
    assert!(fixture.image_exists(&kept));
    assert!(fixture.image_exists(&added));
    assert!(!fixture.image_exists(&removed));
}

#[test]
fn missing_image_files_do_not_fail_the_update() {
    let fixture = BackendFixture::new();
    let image = fixture.store_image();
    let place = flows::create_place(
        &fixture.db_connections,
        &fixture.image_store,
        usecases::NewPlace {
            name: "Mina".into(),
            images: vec![image.clone()],
            ..Default::default()
        },
    )
    .unwrap();
    fixture.image_store.remove(&image).unwrap();
    let updated = flows::update_place(
        &fixture.db_connections,
        &fixture.image_store,
        place.id.as_str(),
        usecases::UpdatePlace {
            name: "Mina".into(),
            remove_images: vec![image],
            ..Default::default()
        },
    )
    .unwrap();
    assert!(updated.images.is_empty());
}

#[test]
fn update_missing_place() {
    let fixture = BackendFixture::new();
    let image = fixture.store_image();
    let err = flows::update_place(
        &fixture.db_connections,
        &fixture.image_store,
        Id::new().as_str(),
        usecases::UpdatePlace {
            name: "Mina".into(),
            new_images: vec![image.clone()],
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::PlaceNotFound))
    ));
    assert!(!fixture.image_exists(&image));
}

#[test]
fn delete_place_with_images_reviews_and_favorites() {
    let fixture = BackendFixture::new();
    let image = fixture.store_image();
    let place = flows::create_place(
        &fixture.db_connections,
        &fixture.image_store,
        usecases::NewPlace {
            name: "Mina".into(),
            images: vec![image.clone()],
            ..Default::default()
        },
    )
    .unwrap();
    let user = fixture.create_user("Ana");
    flows::add_favorite(&fixture.db_connections, &user.id, place.id.as_str()).unwrap();
    flows::submit_review(
        &fixture.db_connections,
        &user.id,
        usecases::NewReview {
            place_id: Some(place.id.to_string()),
            rating: Some(5),
            comment: None,
        },
    )
    .unwrap();

    flows::delete_place(&fixture.db_connections, &fixture.image_store, place.id.as_str()).unwrap();
    assert!(!fixture.image_exists(&image));
    let db = fixture.db_connections.shared().unwrap();
    assert!(matches!(
        db.get_place(place.id.as_str()),
        Err(RepoError::NotFound)
    ));
    assert!(db.favorite_place_ids_of_user(user.id.as_str()).unwrap().is_empty());
}

#[test]
fn toggle_favorites() {
    let fixture = BackendFixture::new();
    let place = fixture.create_place("Mina");
    let user = fixture.create_user("Ana");

    let (_, created) =
        flows::add_favorite(&fixture.db_connections, &user.id, place.id.as_str()).unwrap();
    assert!(created);
    let (_, created) =
        flows::add_favorite(&fixture.db_connections, &user.id, place.id.as_str()).unwrap();
    assert!(!created);
    assert_eq!(1, fixture.get_place(place.id.as_str()).likes);

    assert!(flows::remove_favorite(&fixture.db_connections, &user.id, place.id.as_str()).unwrap());
    assert!(!flows::remove_favorite(&fixture.db_connections, &user.id, place.id.as_str()).unwrap());
    assert_eq!(0, fixture.get_place(place.id.as_str()).likes);
}
