//! signup
//!
//! Registers accounts from JSON signup documents.
//!
//! # Usage
//!
//! ```bash
//! # Validate documents passed as arguments
//! cargo run --bin signup -- '{"username":"ada","email":"a@b.io","password":"analytical","age":36}'
//!
//! # Without arguments a few built-in requests are processed
//! RUST_LOG=signup_sample=debug cargo run --bin signup
//!
//! # Override the default policy
//! SIGNUP_POLICY=policy.json cargo run --bin signup
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use endofunk::data::{Fault, Outcome};
use endofunk::typeclass::{Bifunctor, Monad};
use signup_sample::{Policy, SignupError, register};

const DEMO_REQUESTS: [&str; 3] = [
    r#"{"username":"Ada_L","email":"ada@example.com","password":"analytical","age":36}"#,
    r#"{"username":"admin","email":"nope","password":"123","age":12}"#,
    r#"{"username":"grace""#,
];

fn load_policy() -> Policy {
    let Ok(path) = std::env::var("SIGNUP_POLICY") else {
        return Policy::default();
    };

    Outcome::attempt(|| std::fs::read_to_string(&path))
        .first(|error: std::io::Error| Fault::from_error(&error))
        .flat_map(|text| Policy::from_json(&text))
        .fold(
            |policy| {
                tracing::info!(%path, "policy loaded");
                policy
            },
            |fault| {
                tracing::warn!(%path, %fault, "falling back to the default policy");
                Policy::default()
            },
        )
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signup_sample=info,signup=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let arguments: Vec<String> = std::env::args().skip(1).collect();
    let bodies: Vec<&str> = if arguments.is_empty() {
        DEMO_REQUESTS.to_vec()
    } else {
        arguments.iter().map(String::as_str).collect()
    };

    let policy = load_policy();
    tracing::info!(requests = bodies.len(), "processing signups");

    for body in bodies {
        register(body, &policy).match_with(
            |account| {
                println!("welcome, {} <{}>", account.username.as_str(), account.email.as_str());
            },
            |error| match error {
                SignupError::Malformed(reason) => println!("rejected: {reason}"),
                SignupError::Rejected(fields) => {
                    println!("rejected:");
                    for field in fields {
                        println!("  - {field}");
                    }
                }
            },
        );
    }
}
