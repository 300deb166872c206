// ============================================================================
// UPLOAD SERVICE - Foto de comida: validación, URL prefirmada, PUT a S3
// ============================================================================

use gloo_net::http::Request;
use web_sys::File;

use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::{CreateMealRequest, Meal};
use crate::services::api_client::ApiClient;

pub const OVERSIZED_UPLOAD_MESSAGE: &str = "Try to select a smaller file";

/// Rechaza archivos mayores que `max_bytes` antes de tocar la red
pub fn validate_upload(size_bytes: f64, max_bytes: f64) -> Result<(), AppError> {
    if size_bytes > max_bytes {
        log::warn!(
            "📷 [UPLOAD] Rejected {:.0} bytes (limit {:.0})",
            size_bytes,
            max_bytes
        );
        return Err(AppError::ValidationFailure(OVERSIZED_UPLOAD_MESSAGE.to_string()));
    }
    Ok(())
}

/// Valida el archivo elegido contra el límite configurado
pub fn validate_file(file: &File) -> Result<(), AppError> {
    validate_upload(file.size(), CONFIG.ui_config.max_upload_bytes())
}

/// Sube el archivo con PUT a la URL prefirmada
pub async fn upload_to_presigned(url: &str, file: &File) -> Result<(), AppError> {
    let response = Request::put(url)
        .header("Content-Type", &file.type_())
        .body(file.clone())
        .map_err(|e| AppError::network(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::network(format!("Upload error: {}", e)))?;

    if !response.ok() {
        return Err(AppError::request(
            response.status(),
            "Failed to upload image",
        ));
    }
    Ok(())
}

/// Flujo completo: URL prefirmada, subida, creación de la comida
pub async fn publish_meal(
    api: &ApiClient,
    file: &File,
    text: Option<String>,
) -> Result<Meal, AppError> {
    validate_file(file)?;

    log::info!("📷 [UPLOAD] Requesting presigned URL for {}", file.name());
    let presigned = api.presigned_url(&file.name()).await?;
    upload_to_presigned(&presigned.url, file).await?;
    log::info!("✅ [UPLOAD] Stored as {}", presigned.file_name);

    let text = text.filter(|t| !t.trim().is_empty());
    api.create_meal(&CreateMealRequest {
        photo: presigned.file_name,
        text,
    })
    .await
}
