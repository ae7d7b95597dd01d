//! Image upload and listing handlers.

use axum::{
    body::Bytes,
    extract::{Multipart, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use picshare_core::gallery::{parse_tag_list, ImageListing, MessageResponse, NewImage};

use crate::{context::Identity, handlers::ApiError, state::AppState};

/// Query parameters of GET /images.
#[derive(Debug, Deserialize)]
pub struct ListImagesQuery {
    pub tag: Option<String>,
}

/// Upload an image (POST /upload).
///
/// Multipart form: an `image` file part plus optional `name`,
/// `description`, and comma-separated `tags` text parts. The image row and
/// its tag associations are one transaction; the file write is not part of
/// it, so after a failed database write the stored file is removed
/// best-effort.
pub async fn upload_image(
    State(state): State<AppState>,
    identity: Identity,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut name = None;
    let mut description = None;
    let mut tags_field = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("image") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                file = Some((filename, field.bytes().await?));
            }
            Some("name") => name = Some(field.text().await?),
            Some("description") => description = Some(field.text().await?),
            Some("tags") => tags_field = Some(field.text().await?),
            _ => {}
        }
    }

    let Some((filename, data)) = file else {
        return Err(ApiError::Validation("No image part".to_string()));
    };
    if filename.is_empty() {
        return Err(ApiError::Validation("No selected image".to_string()));
    }

    let image_path = state.files.save(&filename, &data).await?;

    let image = NewImage {
        user_id: identity.user_id,
        image_path,
        name,
        description,
        upload_date: Utc::now(),
        tags: tags_field.as_deref().map(parse_tag_list).unwrap_or_default(),
    };

    let image_id = match state.images.create_image(&image).await {
        Ok(id) => id,
        Err(err) => {
            if let Err(cleanup) = state.files.remove(&image.image_path).await {
                tracing::warn!(
                    error = %cleanup,
                    stored_name = %image.image_path,
                    "failed to remove orphaned upload"
                );
            }
            return Err(err.into());
        }
    };

    tracing::info!(image_id, user_id = identity.user_id, "image uploaded");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Image uploaded successfully")),
    ))
}

/// List images (GET /images), optionally filtered by tag.
///
/// Each entry joins the owner's username and the comma-joined aggregate of
/// all the image's tags; the filter restricts which images appear, never
/// which tags they list.
pub async fn list_images(
    State(state): State<AppState>,
    Query(query): Query<ListImagesQuery>,
) -> Result<Json<Vec<ImageListing>>, ApiError> {
    let listings = state.images.list_images(query.tag.as_deref()).await?;

    Ok(Json(listings))
}
