// src/domain/article/services/mod.rs
mod export_names;
mod image_refs;

pub use export_names::{archive_name, safe_title};
pub use image_refs::collect_image_refs;
