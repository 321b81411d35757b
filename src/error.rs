use thiserror::Error;

use crate::Space;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("interpolation in the {0} color space is not supported")]
    UnsupportedSpace(Space),

    #[error("unknown color space '{0}'")]
    UnknownSpace(String),
}

pub type Result<T> = std::result::Result<T, Error>;
