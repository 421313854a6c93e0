use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The lifecycle of a remote analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AnalysisStatus {
    Pending,
    Completed,
    Failed,
}

/// An analyzed image as reported by the main backend.
///
/// Produced and mutated only by the backend; the client reads, lists,
/// filters, and requests deletion. Analysis payloads stay opaque.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub id: i64,
    pub filename: String,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub perceptual_hash: Option<String>,
    #[serde(default)]
    pub md5_hash: Option<String>,
    /// Likelihood the image is synthetically generated, in `[0, 1]`.
    #[serde(default)]
    pub ai_confidence: Option<f64>,
    #[serde(default)]
    pub has_steganography: Option<bool>,
    /// Serialized metadata blob, opaque to the client.
    #[serde(default)]
    pub metadata_json: Option<String>,
    #[serde(default)]
    pub upload_timestamp: Option<NaiveDateTime>,
    #[serde(default)]
    pub analysis_status: Option<AnalysisStatus>,
    /// Serialized analysis payload, opaque to the client.
    #[serde(default)]
    pub analysis_results: Option<String>,
}

/// Reachability report for the analysis backend, from
/// `GET /api/images/flask-status`.
#[derive(Debug, Clone, Deserialize)]
pub struct FlaskStatus {
    pub flask_connected: bool,
    #[serde(default)]
    pub flask_url: Option<String>,
    #[serde(default)]
    pub flask_status: Option<sonic_rs::Value>,
    #[serde(default)]
    pub services_available: Option<sonic_rs::Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
