//! Image operations against the main backend's `/api/images` surface.
//!
//! Analysis itself happens remotely; these calls upload, list, filter, and
//! delete, and hand results straight back to the caller.

use reqwest::multipart::Form;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::flask::IntegrityReport;
use crate::models::image::{FlaskStatus, ImageRecord};
use crate::validation::upload::ImageUpload;

/// Uploads an image for full analysis.
pub async fn upload_and_analyze(client: &ApiClient, upload: &ImageUpload) -> Result<ImageRecord> {
    tracing::info!("⬆️ Uploading {} for analysis", upload.filename);
    let form = Form::new().part("file", upload.to_part()?);
    client
        .post_multipart(&client.api_url("/images/upload"), form)
        .await
}

/// Uploads an image to have a steganographic signature embedded.
///
/// # Arguments
///
/// * `signature` - Optional user signature text, sent as a form field.
pub async fn add_steganography(
    client: &ApiClient,
    upload: &ImageUpload,
    signature: Option<&str>,
) -> Result<ImageRecord> {
    tracing::info!("✍️ Embedding signature into {}", upload.filename);
    let mut form = Form::new().part("file", upload.to_part()?);
    if let Some(signature) = signature {
        form = form.text("signature", signature.to_string());
    }
    client
        .post_multipart(&client.api_url("/images/steganography"), form)
        .await
}

/// Uploads an image to verify its embedded signature.
pub async fn verify_integrity(
    client: &ApiClient,
    upload: &ImageUpload,
) -> Result<IntegrityReport> {
    tracing::info!("🔎 Verifying integrity of {}", upload.filename);
    let form = Form::new().part("file", upload.to_part()?);
    client
        .post_multipart(&client.api_url("/images/verify"), form)
        .await
}

/// Lists the caller's own images.
pub async fn my_images(client: &ApiClient) -> Result<Vec<ImageRecord>> {
    client.get_json(&client.api_url("/images/my-images")).await
}

/// Lists every image; the backend restricts this to admins.
pub async fn all_images(client: &ApiClient) -> Result<Vec<ImageRecord>> {
    client.get_json(&client.api_url("/images")).await
}

/// Lists images in which steganography was detected.
pub async fn steganography_images(client: &ApiClient) -> Result<Vec<ImageRecord>> {
    client
        .get_json(&client.api_url("/images/steganography"))
        .await
}

/// Lists images whose AI confidence meets `threshold`.
pub async fn ai_detected(client: &ApiClient, threshold: f64) -> Result<Vec<ImageRecord>> {
    client
        .get_json(&client.api_url(&format!("/images/ai-detected?threshold={}", threshold)))
        .await
}

/// Requests deletion of an image record.
pub async fn delete(client: &ApiClient, id: i64) -> Result<()> {
    tracing::info!("🗑️ Deleting image {}", id);
    client.delete(&client.api_url(&format!("/images/{}", id))).await
}

/// Reports whether the main backend can reach the analysis backend.
pub async fn flask_status(client: &ApiClient) -> Result<FlaskStatus> {
    client
        .get_json(&client.api_url("/images/flask-status"))
        .await
}
