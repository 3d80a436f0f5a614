mod service;
mod upload;

pub use service::ImageCommandService;
pub use upload::UploadImageCommand;
