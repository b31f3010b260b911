//! Turns handler outcomes into HTTP responses.
//!
//! Only two status codes come out of here: 200 for a value that serialized,
//! 500 for everything else. 404 belongs to the router.

use core_types::Message;
use lambda_http::http::header::CONTENT_TYPE;
use lambda_http::http::{HeaderValue, StatusCode};
use lambda_http::{Body, Response};
use serde::Serialize;

use crate::error::AppError;

pub const NOT_FOUND_BODY: &str = r#"{"message":"Not Found"}"#;
pub const INTERNAL_ERROR_BODY: &str = r#"{"message":"Internal Server Error"}"#;

/// Encodes a handler outcome.
pub fn encode<T: Serialize>(outcome: Result<T, AppError>) -> Response<Body> {
    match outcome.and_then(|value| serde_json::to_string(&value).map_err(AppError::from)) {
        Ok(body) => json(StatusCode::OK, body),
        Err(err) => err.into_response(),
    }
}

/// Shorthand for the `{"message": ...}` success shape.
pub fn message(outcome: Result<String, AppError>) -> Response<Body> {
    encode(outcome.map(Message::new))
}

pub fn not_found() -> Response<Body> {
    json(StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

pub fn internal_error() -> Response<Body> {
    json(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY)
}

/// A response whose body is already-encoded JSON text.
pub fn json(status: StatusCode, body: impl Into<String>) -> Response<Body> {
    let mut response = Response::new(Body::Text(body.into()));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

/// The body of a response as text. Binary bodies that are not UTF-8 read as empty.
pub fn body_text(body: &Body) -> &str {
    match body {
        Body::Empty => "",
        Body::Text(text) => text,
        Body::Binary(bytes) => std::str::from_utf8(bytes).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::DbError;
    use serde::Serializer;
    use serde::ser::Error as _;

    /// A value whose serialization always fails.
    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("boom"))
        }
    }

    #[test]
    fn success_is_200_with_json_body() {
        let response = message(Ok("Hello from PostgreSQL!".to_string()));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_text(response.body()),
            r#"{"message":"Hello from PostgreSQL!"}"#
        );
        assert_eq!(
            response.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[test]
    fn empty_sequence_is_an_empty_array() {
        let response = encode(Ok(Vec::<Message>::new()));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response.body()), "[]");
    }

    #[test]
    fn database_failure_is_masked() {
        let detail = "relation \"labour_participation\" does not exist";
        let err = DbError::QueryError(sqlx::Error::Protocol(detail.to_string()));

        let response = encode::<Vec<Message>>(Err(err.into()));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response.body()), INTERNAL_ERROR_BODY);
    }

    #[test]
    fn serialization_failure_becomes_500() {
        let response = encode(Ok(Unserializable));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response.body()), INTERNAL_ERROR_BODY);
    }

    #[test]
    fn fixed_bodies_match_the_message_shape() {
        assert_eq!(
            serde_json::to_string(&Message::new("Not Found")).unwrap(),
            NOT_FOUND_BODY
        );
        assert_eq!(
            serde_json::to_string(&Message::new("Internal Server Error")).unwrap(),
            INTERNAL_ERROR_BODY
        );
        assert_eq!(not_found().status(), StatusCode::NOT_FOUND);
    }
}
