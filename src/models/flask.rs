//! Wire types for the Flask analysis backend.
//!
//! This contract uses snake_case field names and overlaps in purpose with
//! the main backend's image surface without sharing its schema. The two are
//! kept as distinct typed models rather than unified behind guesses.

use serde::Deserialize;
use sonic_rs::Value;

/// AI-generation verdict embedded in analysis payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct AiDetection {
    /// Likelihood the image is synthetically generated, in `[0, 1]`.
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// The per-service results attached to a full upload analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisBundle {
    /// Hidden-data detection result, opaque to the client.
    #[serde(default)]
    pub steganography: Option<Value>,
    #[serde(default)]
    pub ai_detection: Option<AiDetection>,
    /// Extracted image metadata, opaque to the client.
    #[serde(default)]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub context_signature: Option<String>,
}

/// The response of `POST /upload`.
///
/// With `only_check_similar` the backend returns only the similarity half,
/// so everything else is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisReport {
    #[serde(default)]
    pub image_id: Option<i64>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub analysis: Option<AnalysisBundle>,
    #[serde(default)]
    pub perceptual_hashes: Option<Value>,
    #[serde(default)]
    pub similar_images: Vec<Value>,
    #[serde(default)]
    pub similar_found: bool,
    #[serde(default)]
    pub upload_timestamp: Option<String>,
}

/// The response of `POST /add_steganography`.
#[derive(Debug, Clone, Deserialize)]
pub struct SignatureReport {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub image_id: Option<i64>,
    /// Public path of the signed output image.
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub context_signature: Option<String>,
    #[serde(default)]
    pub user_signature: Option<String>,
    #[serde(default)]
    pub ai_detection: Option<AiDetection>,
    #[serde(default)]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub similar_images: Vec<Value>,
    #[serde(default)]
    pub similar_found: bool,
}

/// The response of `POST /verify_integrity`.
#[derive(Debug, Clone, Deserialize)]
pub struct IntegrityReport {
    pub steganography_detected: bool,
    #[serde(default)]
    pub current_context_signature: Option<String>,
    #[serde(default)]
    pub embedded_context_signature: Option<String>,
    #[serde(default)]
    pub user_signature: Option<String>,
    pub signatures_match: bool,
    pub tampered: bool,
    #[serde(default)]
    pub similar_images: Vec<Value>,
    #[serde(default)]
    pub similar_found: bool,
}

/// One row of the paginated `GET /images` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageSummary {
    pub id: i64,
    pub filename: String,
    #[serde(default)]
    pub upload_timestamp: Option<String>,
    #[serde(default)]
    pub has_steganography: Option<bool>,
    #[serde(default)]
    pub ai_confidence: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Pagination envelope of the `GET /images` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub pages: u32,
    pub per_page: u32,
    pub total: u64,
}

/// The response of `GET /images`.
#[derive(Debug, Clone, Deserialize)]
pub struct ImagePage {
    pub images: Vec<ImageSummary>,
    pub pagination: Pagination,
}

/// The response of `GET /test`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceHealth {
    pub message: String,
    #[serde(default)]
    pub services: Option<Value>,
    #[serde(default)]
    pub endpoints: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn similarity_only_report_parses() {
        let raw = r#"{"similar_images":[],"similar_found":false}"#;
        let report: AnalysisReport = sonic_rs::from_str(raw).unwrap();
        assert!(!report.similar_found);
        assert!(report.image_id.is_none());
        assert!(report.analysis.is_none());
    }

    #[test]
    fn integrity_report_parses_tampered_flags() {
        let raw = r#"{
            "steganography_detected": true,
            "current_context_signature": "CV:abc",
            "embedded_context_signature": "CV:def",
            "user_signature": "alice",
            "signatures_match": false,
            "tampered": true,
            "similar_images": [],
            "similar_found": false
        }"#;
        let report: IntegrityReport = sonic_rs::from_str(raw).unwrap();
        assert!(report.tampered);
        assert!(!report.signatures_match);
        assert_eq!(report.user_signature.as_deref(), Some("alice"));
    }
}
