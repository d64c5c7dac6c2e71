use super::json_error_response;
use crate::web::catchers::INTERNAL_ERROR_MESSAGE;
use anyhow::anyhow;
use minerapp_application::error::{AppError, BError};
pub use minerapp_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        AppError::from(err).into()
    }
}

fn parameter_error_status(err: &ParameterError) -> Status {
    match err {
        ParameterError::Credentials | ParameterError::Unauthorized => Status::Unauthorized,
        ParameterError::PlaceNotFound
        | ParameterError::CategoryNotFound
        | ParameterError::ReviewNotFound => Status::NotFound,
        // Wrapped repository errors are unwrapped by `BError`
        ParameterError::Repo(_) => Status::InternalServerError,
        _ => Status::BadRequest,
    }
}

fn internal_error<'r, 'o: 'r>(
    req: &'r rocket::Request<'_>,
    err: &dyn std::fmt::Display,
) -> response::Result<'o> {
    error!("{} {} failed: {err}", req.method(), req.uri());
    json_error_response(req, &INTERNAL_ERROR_MESSAGE, Status::InternalServerError)
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                if let AppError::Business(err) = &err {
                    match err {
                        BError::Parameter(err) => {
                            let status = parameter_error_status(err);
                            if status != Status::InternalServerError {
                                return json_error_response(req, err, status);
                            }
                        }
                        BError::Repo(RepoError::NotFound) => {
                            return json_error_response(req, &"No encontrado", Status::NotFound);
                        }
                        BError::Repo(_) => {}
                    }
                }
                internal_error(req, &err)
            }
            Error::OtherWithStatus(err, status) => {
                debug!("{} {} rejected: {err}", req.method(), req.uri());
                let message = if status == Status::UnprocessableEntity {
                    "Datos inválidos".to_owned()
                } else {
                    err.to_string()
                };
                json_error_response(req, &message, status)
            }
            Error::Other(err) => internal_error(req, &err),
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}
