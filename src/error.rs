use thiserror::Error;

/// Top-level error type for the Umbra shape engine.
#[derive(Debug, Error)]
pub enum UmbraError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors related to template parameters.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("parameter {parameter} = {value} is not a finite, valid value")]
    InvalidParameter { parameter: &'static str, value: f64 },
}

/// Errors related to the scene the templates are placed in.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("wall index is not ready to be queried")]
    WallIndexUnavailable,
}

/// Convenience type alias for results using [`UmbraError`].
pub type Result<T> = std::result::Result<T, UmbraError>;
