//! Integration tests for Validation.
//!
//! A registration form is checked field by field. Independent checks are
//! combined with the Applicative operations and must report every failed
//! field; dependent checks go through `flat_map` and stop early.

use endofunk::data::Validation;
use endofunk::typeclass::{Applicative, Bifunctor, Functor, Monad};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldError {
    EmptyName,
    InvalidEmail(String),
    TooYoung(u32),
    PasswordTooShort(usize),
    PasswordMismatch,
}

#[derive(Debug, PartialEq, Eq)]
struct Registration {
    name: String,
    email: String,
    age: u32,
}

type Checked<T> = Validation<T, Vec<FieldError>>;

fn validate_name(name: &str) -> Checked<String> {
    Validation::ensure(name.trim().to_string(), |name| !name.is_empty(), FieldError::EmptyName)
}

fn validate_email(email: &str) -> Checked<String> {
    Validation::ensure(
        email.to_string(),
        |email| email.contains('@'),
        FieldError::InvalidEmail(email.to_string()),
    )
}

fn validate_age(age: u32) -> Checked<u32> {
    Validation::ensure(age, |age| *age >= 18, FieldError::TooYoung(age))
}

fn validate_password(password: &str) -> Checked<String> {
    Validation::ensure(
        password.to_string(),
        |password| password.len() >= 8,
        FieldError::PasswordTooShort(password.len()),
    )
}

fn confirm(password: String, confirmation: &str) -> Checked<String> {
    if password == confirmation {
        Validation::Valid(password)
    } else {
        Validation::fail(FieldError::PasswordMismatch)
    }
}

fn register(name: &str, email: &str, age: u32) -> Checked<Registration> {
    validate_name(name).map3(validate_email(email), validate_age(age), |name, email, age| {
        Registration { name, email, age }
    })
}

#[rstest]
fn valid_form_builds_the_registration() {
    assert_eq!(
        register(" Ada ", "ada@example.com", 36),
        Validation::Valid(Registration {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            age: 36,
        })
    );
}

#[rstest]
#[case("", "ada@example.com", 36, vec![FieldError::EmptyName])]
#[case("Ada", "nope", 36, vec![FieldError::InvalidEmail("nope".to_string())])]
#[case("", "nope", 36, vec![FieldError::EmptyName, FieldError::InvalidEmail("nope".to_string())])]
#[case(
    "",
    "nope",
    12,
    vec![
        FieldError::EmptyName,
        FieldError::InvalidEmail("nope".to_string()),
        FieldError::TooYoung(12),
    ]
)]
fn invalid_form_reports_every_failed_field(
    #[case] name: &str,
    #[case] email: &str,
    #[case] age: u32,
    #[case] expected: Vec<FieldError>,
) {
    assert_eq!(register(name, email, age), Validation::Invalid(expected));
}

#[rstest]
fn dependent_check_stops_at_the_first_error() {
    let result = validate_password("short").flat_map(|password| confirm(password, "different"));
    assert_eq!(result, Validation::Invalid(vec![FieldError::PasswordTooShort(5)]));
}

#[rstest]
fn dependent_check_runs_after_a_valid_step() {
    let result =
        validate_password("long enough").flat_map(|password| confirm(password, "different"));
    assert_eq!(result, Validation::Invalid(vec![FieldError::PasswordMismatch]));
}

#[rstest]
fn independent_and_dependent_checks_mix() {
    let password = validate_password("short").flat_map(|password| confirm(password, "short"));
    let result = validate_name("").product(password);
    assert_eq!(
        result,
        Validation::Invalid(vec![FieldError::EmptyName, FieldError::PasswordTooShort(5)])
    );
}

#[rstest]
fn apply_accumulates_while_apply_fail_fast_does_not() {
    let build = |name: String| move |email: String| format!("{name} <{email}>");

    let accumulated = validate_name("").fmap(build).apply(validate_email("nope"));
    assert_eq!(
        accumulated,
        Validation::Invalid(vec![
            FieldError::EmptyName,
            FieldError::InvalidEmail("nope".to_string()),
        ])
    );

    let fail_fast = validate_name("").fmap(build).apply_fail_fast(validate_email("nope"));
    assert_eq!(fail_fast, Validation::Invalid(vec![FieldError::EmptyName]));
}

#[rstest]
fn collecting_checks_every_item() {
    let ages = [20, 5, 40, 17];
    let checked: Checked<Vec<u32>> = ages.iter().copied().map(validate_age).collect();
    assert_eq!(
        checked,
        Validation::Invalid(vec![FieldError::TooYoung(5), FieldError::TooYoung(17)])
    );
}

#[rstest]
fn errors_can_be_rendered_for_display() {
    let messages = register("", "nope", 12)
        .first(|errors: Vec<FieldError>| {
            errors.iter().map(|error| format!("{error:?}")).collect::<Vec<_>>()
        });
    assert_eq!(messages.invalid().map(|messages| messages.len()), Some(3));
}

#[rstest]
fn string_errors_use_concatenation() {
    let name: Validation<&str, String> = Validation::Invalid("name;".to_string());
    let age: Validation<u32, String> = Validation::Invalid("age;".to_string());
    assert_eq!(
        name.map2(age, |name, age| (name, age)),
        Validation::Invalid("name;age;".to_string())
    );
}

#[rstest]
fn unit_errors_only_track_failure() {
    let left: Validation<i32, ()> = Validation::Invalid(());
    let right: Validation<i32, ()> = Validation::Valid(1);
    assert_eq!(left.map2(right, |a, b| a + b), Validation::Invalid(()));
}
