use super::{create_new_place::*, prelude::*};
use crate::util::validate;

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct UpdatePlace {
    pub name          : String,
    pub description   : Option<String>,
    pub category      : Option<String>,
    pub tags          : Vec<String>,
    /// Replaces the current coordinates if present
    pub location      : Option<Location>,
    /// Replaces the current map link if present
    pub map_link      : Option<String>,
    pub new_images    : Vec<String>,
    pub remove_images : Vec<String>,
}

/// The updated place and the detached image paths.
///
/// The files behind the detached images must only be deleted
/// after the update has been committed.
#[derive(Debug, Clone)]
pub struct UpdatedPlace {
    pub place: Place,
    pub detached_images: Vec<String>,
}

pub fn update_place<R: PlaceRepo>(repo: &R, id: &str, update: UpdatePlace) -> Result<UpdatedPlace> {
    let UpdatePlace {
        name,
        description,
        category,
        tags,
        location,
        map_link,
        new_images,
        remove_images,
    } = update;
    let mut place = repo.get_place(id).or_not_found(Error::PlaceNotFound)?;
    let map_link = validate::non_blank(map_link);
    let keep_location = location.is_none() && map_link.is_none();
    let attrs = prepare_place_attributes(name, description, category, tags, location, map_link)?;
    place.name = attrs.name;
    place.description = attrs.description;
    place.category = attrs.category;
    place.tags = attrs.tags;
    if !keep_location {
        place.location = attrs.location;
        place.map_link = attrs.map_link;
    }
    let detached_images = place.detach_images(remove_images.iter().map(String::as_str));
    place.attach_images(new_images);
    place.updated_at = Timestamp::now();
    log::debug!(
        "Updating place: id = {}, detached images = {}",
        place.id,
        detached_images.len()
    );
    repo.update_place(&place)?;
    Ok(UpdatedPlace {
        place,
        detached_images,
    })
}
