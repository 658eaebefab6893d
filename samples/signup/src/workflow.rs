//! Field validators and the registration pipeline.
//!
//! Validators that depend on the [`Policy`] return
//! `Reader<Policy, Checked<T>>`; the rest return `Checked<T>` directly.
//! [`validate`] combines them so that every broken field is reported, and
//! [`register`] runs the whole pipeline from a JSON body to an account.

use std::fmt;

use endofunk::data::{Outcome, Reader, Validation};
use endofunk::lift_a;
use endofunk::typeclass::Monad;

use crate::error::{FieldError, SignupError};
use crate::input::{SignupRequest, parse_request};
use crate::policy::Policy;

/// A validation whose failures are field errors.
pub type Checked<T> = Validation<T, Vec<FieldError>>;

/// A validated, normalized username.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An email address containing exactly one `@` with text on both sides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A password that met the policy. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Password(****)")
    }
}

/// A registered account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub username: Username,
    pub email: Email,
    pub password: Password,
    pub age: i64,
}

impl Account {
    fn new(username: Username, email: Email, password: Password, age: i64) -> Self {
        Self {
            username,
            email,
            password,
            age,
        }
    }
}

// =============================================================================
// Field validators
// =============================================================================

/// Trims, lowercases, and checks the username against the policy.
pub fn validate_username(raw: String) -> Reader<Policy, Checked<Username>> {
    Reader::asks(move |policy: Policy| {
        let name = raw.trim().to_lowercase();
        if name.is_empty() {
            Validation::fail(FieldError::new("username", "must not be empty"))
        } else if name.chars().count() > policy.maximum_username_length {
            Validation::fail(FieldError::new(
                "username",
                format!("must not be more than {} chars", policy.maximum_username_length),
            ))
        } else if !name
            .chars()
            .all(|character| character.is_ascii_alphanumeric() || character == '_')
        {
            Validation::fail(FieldError::new(
                "username",
                "may only contain letters, digits and '_'",
            ))
        } else if policy.is_reserved(&name) {
            Validation::fail(FieldError::new("username", format!("'{name}' is reserved")))
        } else {
            Validation::Valid(Username(name))
        }
    })
}

/// Checks the shape of an email address. Needs no policy.
pub fn validate_email(raw: &str) -> Checked<Email> {
    let trimmed = raw.trim();
    match trimmed.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Validation::Valid(Email(trimmed.to_string()))
        }
        _ => Validation::fail(FieldError::new(
            "email",
            format!("'{trimmed}' is not an email address"),
        )),
    }
}

/// Checks password length, then that it is not just the username.
pub fn validate_password(raw: String) -> Reader<Policy, Checked<Password>> {
    Reader::asks(move |policy: Policy| {
        Validation::ensure(
            Password(raw.clone()),
            |password| password.len() >= policy.minimum_password_length,
            FieldError::new(
                "password",
                format!("must be at least {} chars", policy.minimum_password_length),
            ),
        )
        .flat_map(|password| {
            Validation::ensure(
                password,
                |password| !password.0.chars().all(|character| character.is_ascii_digit()),
                FieldError::new("password", "must not be only digits"),
            )
        })
    })
}

/// Checks the age against the policy minimum.
pub fn validate_age(age: i64) -> Reader<Policy, Checked<i64>> {
    Reader::asks(move |policy: Policy| {
        if age < 0 {
            Validation::fail(FieldError::new("age", "must not be negative"))
        } else {
            Validation::ensure(
                age,
                |age| *age >= policy.minimum_age,
                FieldError::new("age", format!("must be at least {}", policy.minimum_age)),
            )
        }
    })
}

// =============================================================================
// Pipeline
// =============================================================================

/// Validates every field of `request`, collecting all failures.
pub fn validate(request: SignupRequest) -> Reader<Policy, Checked<Account>> {
    let email = validate_email(&request.email);
    validate_username(request.username).map3(
        validate_password(request.password),
        validate_age(request.age),
        move |username, password, age| {
            lift_a!(Account::new; username, email.clone(), password, age)
        },
    )
}

/// Parses `body`, validates it under `policy`, and returns the new account.
///
/// # Examples
///
/// ```
/// use signup_sample::{Policy, SignupError, register};
///
/// let body = r#"{"username":"Ada_L","email":"ada@example.com","password":"analytical","age":36}"#;
/// let account = register(body, &Policy::default()).success().unwrap();
/// assert_eq!(account.username.as_str(), "ada_l");
///
/// let body = r#"{"username":"admin","email":"nope","password":"123","age":12}"#;
/// let error = register(body, &Policy::default()).failure().unwrap();
/// assert_eq!(error.fields().len(), 4);
/// ```
pub fn register(body: &str, policy: &Policy) -> Outcome<Account, SignupError> {
    let outcome = parse_request(body).flat_map(|request| {
        tracing::debug!(username = %request.username, "validating signup");
        Outcome::from(
            validate(request)
                .run(policy.clone())
                .into_result()
                .map_err(SignupError::Rejected),
        )
    });

    match &outcome {
        Outcome::Success(account) => {
            tracing::info!(username = account.username.as_str(), "account registered");
        }
        Outcome::Failure(SignupError::Malformed(reason)) => {
            tracing::warn!(%reason, "malformed signup request");
        }
        Outcome::Failure(SignupError::Rejected(errors)) => {
            tracing::warn!(rejected = errors.len(), "signup rejected");
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("  Ada_L ", Validation::Valid(Username("ada_l".to_string())))]
    #[case("", Validation::fail(FieldError::new("username", "must not be empty")))]
    #[case("Root", Validation::fail(FieldError::new("username", "'root' is reserved")))]
    fn validate_username_normalizes_and_checks(
        #[case] raw: &str,
        #[case] expected: Checked<Username>,
    ) {
        assert_eq!(validate_username(raw.to_string()).run(Policy::default()), expected);
    }

    #[rstest]
    #[case("ada@example.com", true)]
    #[case("ada@", false)]
    #[case("@example.com", false)]
    #[case("a@b@c", false)]
    fn validate_email_checks_shape(#[case] raw: &str, #[case] valid: bool) {
        assert_eq!(validate_email(raw).is_valid(), valid);
    }

    #[rstest]
    fn validate_password_stops_after_length_failure() {
        let result = validate_password("123".to_string()).run(Policy::default());

        assert_eq!(
            result.invalid(),
            Some(vec![FieldError::new("password", "must be at least 10 chars")])
        );
    }

    #[rstest]
    fn validate_password_rejects_digits_only() {
        let result = validate_password("1234567890".to_string()).run(Policy::default());

        assert_eq!(
            result.invalid(),
            Some(vec![FieldError::new("password", "must not be only digits")])
        );
    }

    #[rstest]
    fn password_debug_is_redacted() {
        assert_eq!(format!("{:?}", Password("secret".to_string())), "Password(****)");
    }
}
