//! Outcome type - the result of a computation that may fail.
//!
//! `Outcome<T, E>` is either a `Success(T)` or a `Failure(E)`. It plays the
//! same role as `std::result::Result` and converts to and from it, but
//! takes part in the shared [`Functor`] / [`Applicative`] / [`Monad`]
//! interface and adds [`Outcome::catching`], which turns a panicking
//! closure into a `Failure`.
//!
//! In a chain of `flat_map` calls the first `Failure` skips every later
//! step.
//!
//! # Examples
//!
//! ```rust
//! use endofunk::data::Outcome;
//! use endofunk::typeclass::Monad;
//!
//! fn divide(numerator: i32, denominator: i32) -> Outcome<i32, String> {
//!     if denominator == 0 {
//!         Outcome::Failure("division by zero".to_string())
//!     } else {
//!         Outcome::Success(numerator / denominator)
//!     }
//! }
//!
//! let result = divide(100, 5).flat_map(|n| divide(n, 2));
//! assert_eq!(result, Outcome::Success(10));
//!
//! let result = divide(100, 0).flat_map(|n| divide(n, 2));
//! assert_eq!(result, Outcome::Failure("division by zero".to_string()));
//! ```

use std::fmt;
use std::panic::{self, UnwindSafe};

use super::Fault;
use crate::typeclass::{Applicative, Bifunctor, Functor, Monad, TypeConstructor};

/// The result of a computation: `Success(T)` or `Failure(E)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Runs a fallible closure and captures its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofunk::data::Outcome;
    ///
    /// let parsed = Outcome::attempt(|| "12".parse::<u8>());
    /// assert_eq!(parsed, Outcome::Success(12));
    /// ```
    #[inline]
    pub fn attempt<F>(function: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        function().into()
    }

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the success value, if any.
    #[inline]
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure value, if any.
    #[inline]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrows both sides, turning `&Outcome<T, E>` into `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the failure value, leaving a success untouched.
    #[inline]
    pub fn map_failure<G, F>(self, function: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Eliminates the `Outcome`. The success handler comes first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofunk::data::Outcome;
    ///
    /// let done: Outcome<u32, String> = Outcome::Success(3);
    /// assert_eq!(done.fold(|n| n + 1, |error| error.len() as u32), 4);
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_success: F, on_failure: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Runs one of two handlers for its side effect.
    #[inline]
    pub fn match_with<F, G>(self, on_success: F, on_failure: G)
    where
        F: FnOnce(T),
        G: FnOnce(E),
    {
        self.fold(on_success, on_failure);
    }

    /// Converts into the standard library's `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T> Outcome<T, Fault> {
    /// Runs `function`, turning a panic into `Failure(Fault)`.
    ///
    /// The panic message is kept in the fault and logged at `warn` level.
    /// The process-wide panic hook still runs, so the message is also
    /// printed to stderr unless the hook has been replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofunk::data::Outcome;
    ///
    /// let value = Outcome::catching(|| 2 + 2);
    /// assert_eq!(value, Outcome::Success(4));
    ///
    /// let items: Vec<i32> = Vec::new();
    /// let failed = Outcome::catching(|| items[3]);
    /// assert!(failed.is_failure());
    /// ```
    pub fn catching<F>(function: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(function) {
            Ok(value) => Self::Success(value),
            Err(payload) => {
                let fault = Fault::from_panic(payload.as_ref());
                tracing::warn!(fault = %fault.message, "caught panic");
                Self::Failure(fault)
            }
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}

impl<T, E> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> Applicative for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Outcome::Success(b)) => Outcome::Success(function(a, b)),
            (Self::Failure(error), _) | (_, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Outcome<B, E>,
        third: Outcome<C, E>,
        function: F,
    ) -> Outcome<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        self.map2(second, |a, b| (a, b))
            .map2(third, |(a, b), c| function(a, b, c))
    }
}

impl<T, E> Monad for Outcome<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> Bifunctor<E, T> for Outcome<T, E> {
    type Target<C, D> = Outcome<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Outcome<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Self::Success(value) => Outcome::Success(second_function(value)),
            Self::Failure(error) => Outcome::Failure(first_function(error)),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
