pub mod upload;

pub use upload::upload_media_handler;
