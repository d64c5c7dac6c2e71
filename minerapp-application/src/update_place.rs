use super::{images::remove_image_files, *};

pub fn update_place(
    connections: &sqlite::Connections,
    images: &dyn ImageStore,
    id: &str,
    update: usecases::UpdatePlace,
) -> Result<Place> {
    let new_images = update.new_images.clone();
    let usecases::UpdatedPlace {
        place,
        detached_images,
    } = match store_updated_place(connections, id, update) {
        Ok(updated) => updated,
        Err(err) => {
            remove_image_files(images, &new_images);
            return Err(err);
        }
    };
    // The update has been committed and the detached
    // images are no longer referenced.
    remove_image_files(images, &detached_images);
    Ok(place)
}

fn store_updated_place(
    connections: &sqlite::Connections,
    id: &str,
    update: usecases::UpdatePlace,
) -> Result<usecases::UpdatedPlace> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::update_place(conn, id, update))
        .inspect_err(|err| {
            debug!("Failed to update place {id}: {err}");
        })?)
}
