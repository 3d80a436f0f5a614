// src/presentation/http/controllers/images.rs
use crate::application::commands::images::UploadImageCommand;
use crate::application::dto::ImageUploadDto;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Multipart};

const FILE_FIELD: &str = "image";

pub async fn upload_image(
    Extension(state): Extension<HttpState>,
    mut multipart: Multipart,
) -> HttpResult<Json<ImageUploadDto>> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| HttpError::bad_request(err.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(file_name) = field.file_name().map(ToString::to_string) else {
            continue;
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|err| HttpError::bad_request(err.to_string()))?;
        file = Some((file_name, bytes.to_vec()));
        break;
    }

    let (file_name, bytes) =
        file.ok_or_else(|| HttpError::bad_request("no file supplied"))?;

    state
        .services
        .image_commands
        .upload_image(UploadImageCommand { file_name, bytes })
        .await
        .into_http()
        .map(Json)
}
