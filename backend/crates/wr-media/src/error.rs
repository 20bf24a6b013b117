use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Segmentation request failed: {message} {location}")]
    Segmentation {
        message: String,
        location: ErrorLocation,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Storage I/O error at {path}: {source} {location}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Invalid object path '{path}' {location}")]
    InvalidPath {
        path: String,
        location: ErrorLocation,
    },

    #[error("Image is empty {location}")]
    EmptyImage { location: ErrorLocation },
}

impl MediaError {
    #[track_caller]
    pub fn segmentation<S: Into<String>>(message: S) -> Self {
        MediaError::Segmentation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
            source: None,
        }
    }

    #[track_caller]
    pub fn storage(path: PathBuf, source: std::io::Error) -> Self {
        MediaError::Storage {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for MediaError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        MediaError::Segmentation {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: Some(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, MediaError>;
