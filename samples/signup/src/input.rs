//! The signup request as it arrives over the wire.

use endofunk::data::Outcome;
use endofunk::typeclass::Bifunctor;
use serde::Deserialize;

use crate::error::SignupError;

/// Unvalidated signup fields.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub age: i64,
}

/// Parses a JSON signup document.
///
/// # Examples
///
/// ```
/// use signup_sample::input::parse_request;
///
/// let body = r#"{"username":"ada","email":"ada@example.com","password":"analytical","age":36}"#;
/// let parsed = parse_request(body);
/// assert!(parsed.is_success());
/// assert!(parse_request("{").is_failure());
/// ```
pub fn parse_request(body: &str) -> Outcome<SignupRequest, SignupError> {
    Outcome::attempt(|| serde_json::from_str::<SignupRequest>(body))
        .first(|error: serde_json::Error| SignupError::Malformed(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn parse_request_reads_every_field() {
        let body = r#"{"username":"grace","email":"g@navy.mil","password":"cobol1959","age":85}"#;
        let request = parse_request(body);

        assert_eq!(
            request,
            Outcome::Success(SignupRequest {
                username: "grace".to_string(),
                email: "g@navy.mil".to_string(),
                password: "cobol1959".to_string(),
                age: 85,
            })
        );
    }

    #[rstest]
    #[case("")]
    #[case("[]")]
    #[case(r#"{"username":"grace"}"#)]
    #[case(r#"{"username":"grace","email":"g","password":"p","age":"old"}"#)]
    fn parse_request_rejects_bad_documents(#[case] body: &str) {
        let parsed = parse_request(body);

        assert!(matches!(parsed, Outcome::Failure(SignupError::Malformed(_))));
    }
}
