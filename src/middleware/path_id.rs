//! Numeric path id pipe.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures::future::{ready, Ready};
use log::warn;

use crate::constants::{CODE_NUMERIC_ID_EXPECTED, ERR_NUMERIC_ID_EXPECTED};
use crate::errors::ApiError;

/// The `{id}` segment parsed as an integer.
///
/// Anything else is answered with 406 Not Acceptable before the handler
/// runs, so the body of a PATCH is not looked at for a bad id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericId(pub i64);

impl NumericId {
    pub fn into_inner(self) -> i64 {
        self.0
    }

    /// Accepts an optional `-` followed by ASCII digits, nothing else.
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        let digits = raw.strip_prefix('-').unwrap_or(raw);
        let well_formed = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());

        well_formed
            .then(|| raw.parse::<i64>().ok())
            .flatten()
            .map(NumericId)
            .ok_or_else(|| {
                warn!("Rejected non-numeric id: {}", raw);
                ApiError::not_acceptable(CODE_NUMERIC_ID_EXPECTED, ERR_NUMERIC_ID_EXPECTED)
            })
    }
}

impl FromRequest for NumericId {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(NumericId::parse(req.match_info().get("id").unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn test_parse() {
        assert_eq!(NumericId::parse("42").unwrap(), NumericId(42));
        assert_eq!(NumericId::parse("-3").unwrap().into_inner(), -3);

        let err = NumericId::parse("abc").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_ACCEPTABLE);
        assert_eq!(err.message(), ERR_NUMERIC_ID_EXPECTED);
        assert!(NumericId::parse("").is_err());
        assert!(NumericId::parse("1.5").is_err());
    }

    #[test]
    fn test_parse_rejects_signs_and_padding() {
        assert!(NumericId::parse("+42").is_err());
        assert!(NumericId::parse(" 42").is_err());
        assert!(NumericId::parse("42 ").is_err());
        assert!(NumericId::parse("-").is_err());
        assert!(NumericId::parse("99999999999999999999").is_err());
    }
}
