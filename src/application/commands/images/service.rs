use std::sync::Arc;

use crate::application::ports::files::FileStore;

pub struct ImageCommandService {
    pub(super) file_store: Arc<dyn FileStore>,
}

impl ImageCommandService {
    pub fn new(file_store: Arc<dyn FileStore>) -> Self {
        Self { file_store }
    }
}
