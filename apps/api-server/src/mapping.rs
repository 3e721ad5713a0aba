//! JSON request decoding and response writing.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use serde::{Serialize, de::DeserializeOwned};

use crate::middleware::error::AppError;

/// Decode a raw request body into `T`.
///
/// Bodies are decoded by hand rather than with `web::Json` so that handlers
/// control when decoding happens relative to the id lookup.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    Ok(serde_json::from_slice(body)?)
}

/// Serialize `payload` and write it with `status`.
///
/// If serialization fails the failure is logged and a 500 problem response is
/// written instead.
pub fn send_json<T: Serialize>(status: StatusCode, payload: &T) -> HttpResponse {
    match serde_json::to_vec(payload) {
        Ok(body) => {
            tracing::debug!(status = status.as_u16(), bytes = body.len(), "Sending JSON response");
            HttpResponse::build(status)
                .content_type(ContentType::json())
                .body(body)
        }
        Err(err) => {
            AppError::Internal(format!("failed to serialize response: {}", err)).error_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::header;
    use blog_shared::PostRequest;
    use serde::ser::Error as _;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("refused"))
        }
    }

    #[test]
    fn decodes_valid_body() {
        let req: PostRequest =
            decode_json(br#"{"title":"A","content":"B","category":"C","tags":["x"]}"#).unwrap();
        assert_eq!(req.tags, vec!["x"]);
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let result: Result<PostRequest, _> = decode_json(b"{not json");
        assert!(matches!(result, Err(AppError::Decode(_))));
    }

    #[test]
    fn wrong_field_type_is_a_decode_error() {
        let result: Result<PostRequest, _> = decode_json(br#"{"tags":"x"}"#);
        assert!(matches!(result, Err(AppError::Decode(_))));
    }

    #[actix_web::test]
    async fn send_json_sets_status_and_content_type() {
        let res = send_json(StatusCode::CREATED, &serde_json::json!({"ok": true}));
        assert_eq!(res.status(), StatusCode::CREATED);
        assert_eq!(
            res.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body = to_bytes(res.into_body()).await.unwrap();
        assert_eq!(&body[..], br#"{"ok":true}"#);
    }

    #[test]
    fn serialization_failure_becomes_500() {
        let res = send_json(StatusCode::OK, &Unserializable);
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
