use minerapp_boundary as json;
use minerapp_core::usecases;
use minerapp_db_sqlite::Connections;
use rocket::{delete, get, post, put, serde::json::Json, State};

use crate::web::{
    api::{created, message, JsonResult, Result, StatusResult},
    guards::AdminSession,
};

#[get("/categorias/api")]
pub fn get_categories(db: &State<Connections>, _admin: AdminSession) -> Result<Vec<json::Category>> {
    let categories = usecases::list_categories(&db.shared()?)?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

#[post("/categorias/api", format = "application/json", data = "<category>")]
pub fn post_category(
    db: &State<Connections>,
    _admin: AdminSession,
    category: JsonResult<json::NewCategory>,
) -> StatusResult<json::Category> {
    let name = category?.into_inner().nombre.unwrap_or_default();
    let category = usecases::create_category(&db.exclusive()?, &name)?;
    Ok(created(category.into()))
}

#[put("/categorias/api/<id>", format = "application/json", data = "<category>")]
pub fn put_category(
    db: &State<Connections>,
    _admin: AdminSession,
    id: &str,
    category: JsonResult<json::NewCategory>,
) -> Result<json::Category> {
    let name = category?.into_inner().nombre.unwrap_or_default();
    let category = usecases::update_category(&db.exclusive()?, id, &name)?;
    Ok(Json(category.into()))
}

#[delete("/categorias/api/<id>")]
pub fn delete_category(
    db: &State<Connections>,
    _admin: AdminSession,
    id: &str,
) -> Result<json::Message> {
    usecases::delete_category(&db.exclusive()?, id)?;
    Ok(message("Eliminada"))
}
