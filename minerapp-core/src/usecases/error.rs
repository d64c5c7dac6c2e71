use crate::repositories;
use thiserror::Error;

// The messages are shown to the users of the site.
#[derive(Debug, Error)]
pub enum Error {
    #[error("El nombre es requerido")]
    PlaceName,
    #[error("Coordenadas inválidas")]
    Position,
    #[error("Enlace de mapa inválido")]
    MapLink,
    #[error("Se permiten como máximo {0} imágenes")]
    TooManyImages(usize),
    #[error("Solo se permiten archivos de imagen")]
    NotAnImage,
    #[error("Lugar no encontrado")]
    PlaceNotFound,
    #[error("Nombre requerido")]
    CategoryName,
    #[error("La categoría ya existe")]
    CategoryExists,
    #[error("Categoría no encontrada")]
    CategoryNotFound,
    #[error("El lugar es requerido")]
    MissingPlaceId,
    #[error("La calificación debe estar entre 1 y 5")]
    RatingValue,
    #[error("El comentario no puede superar los 1000 caracteres")]
    Comment,
    #[error("Reseña no encontrada")]
    ReviewNotFound,
    #[error("Todos los campos son requeridos")]
    AdminFieldsRequired,
    #[error("Usuario y contraseña son requeridos")]
    AdminCredentialsRequired,
    #[error("Campos incompletos")]
    UserFieldsRequired,
    #[error("Credenciales incompletas")]
    UserCredentialsRequired,
    #[error("Email inválido")]
    Email,
    #[error("Usuario o email ya registrado")]
    AdminExists,
    #[error("Email ya registrado")]
    UserExists,
    #[error("Contraseña inválida")]
    Password,
    #[error("Credenciales inválidas")]
    Credentials,
    #[error("No autorizado")]
    Unauthorized,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<minerapp_entities::password::ParseError> for Error {
    fn from(_: minerapp_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<minerapp_entities::email::EmailAddressParseError> for Error {
    fn from(_: minerapp_entities::email::EmailAddressParseError) -> Self {
        Self::Email
    }
}

impl From<minerapp_entities::rating::RatingValueOutOfRange> for Error {
    fn from(_: minerapp_entities::rating::RatingValueOutOfRange) -> Self {
        Self::RatingValue
    }
}

impl From<std::num::ParseFloatError> for Error {
    fn from(_: std::num::ParseFloatError) -> Self {
        Self::Position
    }
}
