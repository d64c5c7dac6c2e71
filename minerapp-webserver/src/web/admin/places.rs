use minerapp_application::prelude as flows;
use minerapp_boundary as json;
use minerapp_core::{
    entities::Location,
    gateways::images::ImageStore,
    usecases,
    util::parse::{parse_location, split_tags},
};
use minerapp_db_sqlite::Connections;
use rocket::{
    delete, form::Form, fs::TempFile, get, post, put, serde::json::Json, FromForm, State,
};

use crate::web::{
    api::{created, error::ParameterError, message, places::place_list, ApiError, Result, StatusResult},
    guards::*,
    params::PlaceParams,
    Cfg,
};

/// The multipart form of the place editor.
#[derive(FromForm)]
pub struct PlaceForm<'r> {
    nombre: Option<String>,
    descripcion: Option<String>,
    categoria: Option<String>,
    tags: Vec<String>,
    lat: Option<String>,
    lng: Option<String>,
    #[field(name = "googleMapsLink")]
    google_maps_link: Option<String>,
    images: Vec<TempFile<'r>>,
    #[field(name = "removeImages")]
    remove_images: Vec<String>,
}

impl PlaceForm<'_> {
    fn location(&self) -> std::result::Result<Option<Location>, ParameterError> {
        Ok(parse_location(self.lat.as_deref(), self.lng.as_deref())?)
    }

    fn tags(&self) -> Vec<String> {
        split_tags(self.tags.iter().map(String::as_str))
    }

    fn remove_images(&self) -> Vec<String> {
        parse_remove_images(&self.remove_images)
    }
}

// Each value is either a single path or a JSON array of paths.
fn parse_remove_images(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .flat_map(|v| {
            if v.starts_with('[') {
                serde_json::from_str::<Vec<String>>(v).unwrap_or_else(|err| {
                    debug!("Ignoring invalid list of images to remove: {err}");
                    vec![]
                })
            } else {
                vec![v.to_owned()]
            }
        })
        .collect()
}

fn is_image(file: &TempFile<'_>) -> bool {
    file.content_type()
        .map_or(false, |content_type| content_type.top() == "image")
}

/// Stores the uploaded images and returns their public paths.
///
/// Empty file fields, as sent by browsers if no file has been
/// chosen, are skipped. Nothing is stored if any of the files
/// is rejected.
async fn store_images(
    images: &(dyn ImageStore + Send + Sync),
    files: &mut [TempFile<'_>],
    max_images: usize,
) -> std::result::Result<Vec<String>, ApiError> {
    let mut files: Vec<_> = files.iter_mut().filter(|file| file.len() > 0).collect();
    if files.len() > max_images {
        return Err(ParameterError::TooManyImages(max_images).into());
    }
    if !files.iter().all(|file| is_image(file)) {
        return Err(ParameterError::NotAnImage.into());
    }
    let mut stored = Vec::with_capacity(files.len());
    for file in &mut files {
        let extension = file
            .content_type()
            .and_then(|content_type| content_type.extension())
            .map(|extension| extension.as_str().to_owned());
        let result = match images.allocate(extension.as_deref()) {
            Ok(slot) => file
                .move_copy_to(&slot.file_path)
                .await
                .map(|()| slot.public_path),
            Err(err) => Err(err),
        };
        match result {
            Ok(public_path) => stored.push(public_path),
            Err(err) => {
                flows::remove_image_files(images, &stored);
                return Err(err.into());
            }
        }
    }
    Ok(stored)
}

#[get("/lugares?<params..>", rank = 2)]
pub fn get_places(
    db: &State<Connections>,
    _admin: AdminSession,
    params: PlaceParams<'_>,
) -> Result<json::PlaceList<json::Place>> {
    let list = usecases::query_places(&db.shared()?, &params.query(), params.page())?;
    Ok(Json(place_list(list, Into::into)))
}

#[post("/lugares", data = "<form>")]
pub async fn post_place(
    db: &State<Connections>,
    images: &State<Images>,
    cfg: &State<Cfg>,
    admin: AdminSession,
    mut form: Form<PlaceForm<'_>>,
) -> StatusResult<json::PlaceResponse> {
    let location = form.location()?;
    let tags = form.tags();
    let stored_images = store_images(images.store(), &mut form.images, cfg.max_images).await?;
    let new_place = usecases::NewPlace {
        name: form.nombre.take().unwrap_or_default(),
        description: form.descripcion.take(),
        category: form.categoria.take(),
        tags,
        location,
        map_link: form.google_maps_link.take(),
        images: stored_images,
        created_by: Some(admin.admin_id().clone()),
    };
    let place = flows::create_place(db, images.store(), new_place)?;
    Ok(created(json::PlaceResponse {
        message: "Lugar creado".into(),
        lugar: place.into(),
    }))
}

#[get("/lugares/<id>")]
pub fn get_place(db: &State<Connections>, _admin: AdminSession, id: &str) -> Result<json::Place> {
    let place = usecases::get_place(&db.shared()?, id)?;
    Ok(Json(place.into()))
}

#[put("/lugares/<id>", data = "<form>")]
pub async fn put_place(
    db: &State<Connections>,
    images: &State<Images>,
    cfg: &State<Cfg>,
    _admin: AdminSession,
    id: &str,
    mut form: Form<PlaceForm<'_>>,
) -> Result<json::PlaceResponse> {
    let location = form.location()?;
    let tags = form.tags();
    let remove_images = form.remove_images();
    let new_images = store_images(images.store(), &mut form.images, cfg.max_images).await?;
    let update = usecases::UpdatePlace {
        name: form.nombre.take().unwrap_or_default(),
        description: form.descripcion.take(),
        category: form.categoria.take(),
        tags,
        location,
        map_link: form.google_maps_link.take(),
        new_images,
        remove_images,
    };
    let place = flows::update_place(db, images.store(), id, update)?;
    Ok(Json(json::PlaceResponse {
        message: "Lugar actualizado".into(),
        lugar: place.into(),
    }))
}

#[delete("/lugares/<id>")]
pub fn delete_place(
    db: &State<Connections>,
    images: &State<Images>,
    _admin: AdminSession,
    id: &str,
) -> Result<json::Message> {
    flows::delete_place(db, images.store(), id)?;
    Ok(message("Lugar eliminado"))
}
