//! Site-wide signup rules.
//!
//! Validators read these through a `Reader<Policy, _>`, so the same
//! validation pipeline can run under different rules without threading a
//! parameter through every function.

use std::collections::BTreeSet;
use std::rc::Rc;

use endofunk::data::{Fault, Outcome};
use endofunk::typeclass::{Bifunctor, Functor};
use serde::Deserialize;

/// Limits applied to every signup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Policy {
    pub minimum_password_length: usize,
    pub minimum_age: i64,
    pub maximum_username_length: usize,
    pub reserved_usernames: Rc<BTreeSet<String>>,
}

/// The on-disk form of a [`Policy`]. Missing keys keep their defaults.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PolicyFile {
    minimum_password_length: usize,
    minimum_age: i64,
    maximum_username_length: usize,
    reserved_usernames: Vec<String>,
}

impl Default for PolicyFile {
    fn default() -> Self {
        let policy = Policy::default();
        Self {
            minimum_password_length: policy.minimum_password_length,
            minimum_age: policy.minimum_age,
            maximum_username_length: policy.maximum_username_length,
            reserved_usernames: policy.reserved_usernames.iter().cloned().collect(),
        }
    }
}

impl From<PolicyFile> for Policy {
    fn from(file: PolicyFile) -> Self {
        Self {
            minimum_password_length: file.minimum_password_length,
            minimum_age: file.minimum_age,
            maximum_username_length: file.maximum_username_length,
            reserved_usernames: Rc::new(
                file.reserved_usernames.iter().map(|name| name.to_lowercase()).collect(),
            ),
        }
    }
}

impl Policy {
    /// Reads a policy from JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use signup_sample::Policy;
    ///
    /// let policy = Policy::from_json(r#"{"minimum_age": 21}"#).success().unwrap();
    /// assert_eq!(policy.minimum_age, 21);
    /// assert_eq!(policy.minimum_password_length, 10);
    /// ```
    pub fn from_json(text: &str) -> Outcome<Self, Fault> {
        Outcome::attempt(|| serde_json::from_str::<PolicyFile>(text))
            .first(|error: serde_json::Error| Fault::from_error(&error))
            .fmap(Self::from)
    }

    /// Returns a copy of this policy with `name` added to the reserved names.
    #[must_use]
    pub fn reserving(&self, name: &str) -> Self {
        let mut reserved = (*self.reserved_usernames).clone();
        reserved.insert(name.to_lowercase());
        Self {
            reserved_usernames: Rc::new(reserved),
            ..self.clone()
        }
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_usernames.contains(&name.to_lowercase())
    }
}

impl Default for Policy {
    fn default() -> Self {
        let reserved = ["admin", "root", "support"].into_iter().map(str::to_string).collect();
        Self {
            minimum_password_length: 10,
            minimum_age: 16,
            maximum_username_length: 24,
            reserved_usernames: Rc::new(reserved),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn reserving_leaves_original_untouched() {
        let policy = Policy::default();
        let stricter = policy.reserving("Billing");

        assert!(stricter.is_reserved("billing"));
        assert!(!policy.is_reserved("billing"));
    }

    #[rstest]
    fn from_json_overrides_reserved_names() {
        let policy = Policy::from_json(r#"{"reserved_usernames": ["Ops"]}"#).success().unwrap();

        assert!(policy.is_reserved("ops"));
        assert!(!policy.is_reserved("admin"));
    }

    #[rstest]
    fn from_json_rejects_unknown_keys() {
        let fault = Policy::from_json(r#"{"minimum_karma": 3}"#).failure().unwrap();

        assert!(fault.message.contains("minimum_karma"));
    }

    #[rstest]
    #[case("admin", true)]
    #[case("ROOT", true)]
    #[case("ada", false)]
    fn default_reserved_names(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(Policy::default().is_reserved(name), expected);
    }
}
