use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not read color '{0}': expected three comma-separated numbers like '1,0.5,0'")]
    ColorArgument(String),

    #[error(transparent)]
    Interpolation(#[from] tincture::Error),

    #[error("output error: {0}")]
    Io(io::Error),

    #[error("standard output closed")]
    StdoutClosed,
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> CliError {
        match err.kind() {
            io::ErrorKind::BrokenPipe => CliError::StdoutClosed,
            _ => CliError::Io(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
