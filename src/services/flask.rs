//! Direct operations against the Flask analysis backend.
//!
//! Paths are rewritten under the versioned `/api/v2` prefix the blueprint
//! mounts, matching what the dashboard's dev proxy used to do.

use reqwest::multipart::Form;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::flask::{
    AnalysisReport, ImagePage, IntegrityReport, ServiceHealth, SignatureReport,
};
use crate::validation::upload::ImageUpload;

/// Optional switches for the upload analysis.
#[derive(Debug, Clone, Copy, Default)]
pub struct UploadOptions {
    /// Store the file without running the full analysis.
    pub skip_analysis: bool,
    /// Only report similar images; the file itself is discarded.
    pub only_check_similar: bool,
}

fn upload_query(options: UploadOptions) -> String {
    let mut flags = Vec::new();
    if options.skip_analysis {
        flags.push("skip_analysis=true");
    }
    if options.only_check_similar {
        flags.push("only_check_similar=true");
    }
    if flags.is_empty() {
        String::new()
    } else {
        format!("?{}", flags.join("&"))
    }
}

/// Uploads an image for analysis.
pub async fn upload(
    client: &ApiClient,
    upload: &ImageUpload,
    options: UploadOptions,
) -> Result<AnalysisReport> {
    tracing::info!("⬆️ Uploading {} to the analysis backend", upload.filename);
    let form = Form::new().part("file", upload.to_part()?);
    let url = client.flask_url(&format!("/upload{}", upload_query(options)));
    client.post_multipart(&url, form).await
}

/// Embeds a steganographic signature and returns the signed output.
pub async fn add_steganography(
    client: &ApiClient,
    upload: &ImageUpload,
    signature: Option<&str>,
) -> Result<SignatureReport> {
    tracing::info!("✍️ Embedding signature into {}", upload.filename);
    let mut form = Form::new().part("file", upload.to_part()?);
    if let Some(signature) = signature {
        form = form.text("signature", signature.to_string());
    }
    client
        .post_multipart(&client.flask_url("/add_steganography"), form)
        .await
}

/// Verifies the embedded signature of an image.
pub async fn verify_integrity(
    client: &ApiClient,
    upload: &ImageUpload,
) -> Result<IntegrityReport> {
    tracing::info!("🔎 Verifying integrity of {}", upload.filename);
    let form = Form::new().part("file", upload.to_part()?);
    client
        .post_multipart(&client.flask_url("/verify_integrity"), form)
        .await
}

/// Lists analyzed images, paginated.
pub async fn images(client: &ApiClient, page: u32, per_page: u32) -> Result<ImagePage> {
    client
        .get_json(&client.flask_url(&format!("/images?page={}&per_page={}", page, per_page)))
        .await
}

/// Public URL of an uploaded file under `GET /uploads/:filename`.
///
/// No request is made: the dashboard embeds this URL directly as an image
/// source, so the fetch is left to the caller.
pub fn uploaded_file_url(client: &ApiClient, filename: &str) -> String {
    client.flask_url(&format!("/uploads/{}", filename))
}

/// Probes the analysis backend's `GET /test` endpoint.
pub async fn health(client: &ApiClient) -> Result<ServiceHealth> {
    client.get_json(&client.flask_url("/test")).await
}
