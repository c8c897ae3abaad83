use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};

/// Success body shared by every endpoint: `{"data": ..., "message": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Envelope<T> {
    pub data: T,
    pub message: String,
}

impl<T> Envelope<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }
}

/// Status code plus enveloped JSON body.
pub type EnvelopeResponse<T> = (StatusCode, Json<Envelope<T>>);

/// 200 OK + envelope
pub fn ok_json<T: Serialize>(data: T, message: impl Into<String>) -> EnvelopeResponse<T> {
    (StatusCode::OK, Json(Envelope::new(data, message)))
}

/// 201 Created + envelope
pub fn created_json<T: Serialize>(data: T, message: impl Into<String>) -> EnvelopeResponse<T> {
    (StatusCode::CREATED, Json(Envelope::new(data, message)))
}

/// 202 Accepted + envelope with `data: null`
pub fn accepted_json(message: impl Into<String>) -> EnvelopeResponse<Option<()>> {
    (StatusCode::ACCEPTED, Json(Envelope::new(None, message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_data_and_message() {
        let body = Envelope::new(serde_json::json!({"id": 1}), "Vendor Created Successfully");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["data"]["id"], 1);
        assert_eq!(json["message"], "Vendor Created Successfully");
    }

    #[test]
    fn accepted_json_has_null_data() {
        let (status, Json(body)) = accepted_json("Vendor Deleted Successfully");
        assert_eq!(status, StatusCode::ACCEPTED);
        let json = serde_json::to_value(&body).unwrap();
        assert!(json["data"].is_null());
    }
}
