pub mod background_remover;
pub mod error;
pub mod image_pipeline;
pub mod object_store;


pub use background_remover::{
    BackgroundRemover, DEFAULT_IMAGE_CONTENT_TYPE, HttpBackgroundRemover, PassthroughRemover,
    ProcessedImage,
};
pub use error::{MediaError, Result};
pub use image_pipeline::{ImagePipeline, ImageUpload, sanitize_file_name, storage_path};
pub use object_store::{LocalObjectStore, ObjectStore};
