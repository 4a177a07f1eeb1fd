//! Validation pipe for JSON request bodies and query strings.

use actix_web::dev::Payload;
use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use log::warn;
use serde::de::DeserializeOwned;
use std::ops::Deref;
use validator::Validate;

use crate::constants::CODE_INVALID_PAYLOAD;
use crate::errors::ApiError;
use crate::validators::{validation_errors_to_api_error, FieldOrder};

/// JSON body that has already passed its `Validate` schema.
///
/// Malformed JSON is rejected as `BadRequest`; keys outside the schema and
/// schema failures as `ValidationError`. Handlers only ever see valid
/// payloads.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

/// Name of the offending key when serde rejected a field the schema does
/// not declare (`deny_unknown_fields`).
fn unknown_field(err: &serde_json::Error) -> Option<String> {
    let message = err.to_string();
    let rest = message.strip_prefix("unknown field `")?;
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}

fn payload_error(err: actix_web::Error) -> ApiError {
    if let Some(JsonPayloadError::Deserialize(de)) = err.as_error::<JsonPayloadError>() {
        if let Some(field) = unknown_field(de) {
            return ApiError::validation(vec![format!("{} is not allowed", field)]);
        }
    }
    ApiError::bad_request(CODE_INVALID_PAYLOAD, err.to_string())
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + FieldOrder + 'static,
{
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let json = web::Json::<T>::from_request(req, payload);
        let path = req.path().to_string();

        Box::pin(async move {
            let body = json.await.map_err(|e| {
                warn!("Rejected malformed payload on {}: {}", path, e);
                payload_error(e)
            })?;

            let body = body.into_inner();
            body.validate().map_err(|e| {
                let err = validation_errors_to_api_error(e, T::FIELDS);
                warn!("Validation failed on {}: {}", path, err);
                err
            })?;

            Ok(ValidatedJson(body))
        })
    }
}

/// Query-string counterpart of the body pipe, so list filters that fail to
/// parse get the same error body as everything else.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, req: &HttpRequest| {
        warn!("Rejected query string on {}: {}", req.path(), err);
        ApiError::bad_request(CODE_INVALID_PAYLOAD, err.to_string()).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    #[allow(dead_code)]
    struct Strict {
        name: String,
    }

    #[test]
    fn test_unknown_field_name() {
        let err = serde_json::from_str::<Strict>(r#"{"name":"a","nickname":"b"}"#).unwrap_err();
        assert_eq!(unknown_field(&err).as_deref(), Some("nickname"));

        let err = serde_json::from_str::<Strict>(r#"{"name":1}"#).unwrap_err();
        assert_eq!(unknown_field(&err), None);
    }
}
