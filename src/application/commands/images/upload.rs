use super::ImageCommandService;
use crate::application::{
    dto::ImageUploadDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct UploadImageCommand {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageCommandService {
    pub async fn upload_image(
        &self,
        command: UploadImageCommand,
    ) -> ApplicationResult<ImageUploadDto> {
        // Caller-supplied names are reduced to their final path segment
        // before they touch the filesystem.
        let file_name = command
            .file_name
            .rsplit(['/', '\\'])
            .next()
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| ApplicationError::validation("file name cannot be empty"))?;

        let url = self.file_store.save(file_name, &command.bytes).await?;
        Ok(ImageUploadDto { url })
    }
}
