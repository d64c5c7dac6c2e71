use super::prelude::*;
use crate::util::validate;

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewPlace {
    pub name        : String,
    pub description : Option<String>,
    pub category    : Option<String>,
    pub tags        : Vec<String>,
    pub location    : Option<Location>,
    pub map_link    : Option<String>,
    pub images      : Vec<String>,
    pub created_by  : Option<Id>,
}

/// Validated, normalized attributes that may be changed
/// after a place has been created.
pub(crate) struct PlaceAttributes {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub location: Option<Location>,
    pub map_link: Option<Url>,
}

pub(crate) fn prepare_place_attributes(
    name: String,
    description: Option<String>,
    category: Option<String>,
    tags: Vec<String>,
    location: Option<Location>,
    map_link: Option<String>,
) -> Result<PlaceAttributes> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::PlaceName);
    }
    let map_link = validate::non_blank(map_link)
        .map(|link| validate::parse_map_link(&link).ok_or(Error::MapLink))
        .transpose()?;
    // A map link replaces the coordinates
    let location = if map_link.is_some() { None } else { location };
    if let Some(location) = &location {
        if !validate::is_valid_location(location) {
            return Err(Error::Position);
        }
    }
    Ok(PlaceAttributes {
        name: name.to_owned(),
        description: validate::non_blank(description),
        category: validate::non_blank(category),
        tags: normalize_tags(tags),
        location,
        map_link,
    })
}

pub fn create_new_place<R: PlaceRepo>(repo: &R, new_place: NewPlace) -> Result<Place> {
    let NewPlace {
        name,
        description,
        category,
        tags,
        location,
        map_link,
        images,
        created_by,
    } = new_place;
    let PlaceAttributes {
        name,
        description,
        category,
        tags,
        location,
        map_link,
    } = prepare_place_attributes(name, description, category, tags, location, map_link)?;
    let now = Timestamp::now();
    let mut place = Place {
        id: Id::new(),
        name,
        description,
        category,
        tags,
        images: vec![],
        location,
        map_link,
        created_by,
        visits: 0,
        likes: 0,
        active: true,
        featured: false,
        created_at: now,
        updated_at: now,
    };
    place.attach_images(images);
    log::debug!("Creating new place: id = {}, name = {}", place.id, place.name);
    repo.create_place(&place)?;
    Ok(place)
}
