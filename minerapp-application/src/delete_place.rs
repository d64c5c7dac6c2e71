use super::{images::remove_image_files, *};

/// Deletes a place together with its reviews, favorites
/// and image files.
pub fn delete_place(
    connections: &sqlite::Connections,
    images: &dyn ImageStore,
    id: &str,
) -> Result<Place> {
    let place = connections
        .exclusive()?
        .transaction(|conn| usecases::delete_place(conn, id))?;
    info!("Deleted place {} ({})", place.id, place.name);
    remove_image_files(images, &place.images);
    Ok(place)
}
