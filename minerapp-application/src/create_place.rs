use super::{images::remove_image_files, *};

/// Creates a new place with already stored images.
///
/// The stored image files are removed again if the place
/// could not be created.
pub fn create_place(
    connections: &sqlite::Connections,
    images: &dyn ImageStore,
    new_place: usecases::NewPlace,
) -> Result<Place> {
    let stored_images = new_place.images.clone();
    match store_new_place(connections, new_place) {
        Ok(place) => {
            info!("Created place {} ({})", place.id, place.name);
            Ok(place)
        }
        Err(err) => {
            remove_image_files(images, &stored_images);
            Err(err)
        }
    }
}

fn store_new_place(connections: &sqlite::Connections, new_place: usecases::NewPlace) -> Result<Place> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::create_new_place(conn, new_place))?)
}
