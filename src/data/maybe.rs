//! Maybe type - an optional value.
//!
//! A `Maybe<A>` either contains a value (`Just(a)`) or is empty
//! (`Nothing`). It mirrors `Option<A>`, converts to and from it for free,
//! and takes part in the [`Functor`] / [`Applicative`] / [`Monad`]
//! interface shared with the other containers.
//!
//! # Examples
//!
//! ```rust
//! use endofunk::data::Maybe;
//! use endofunk::typeclass::{Applicative, Monad};
//!
//! fn lookup(key: &str) -> Maybe<u32> {
//!     match key {
//!         "width" => Maybe::Just(4),
//!         "height" => Maybe::Just(3),
//!         _ => Maybe::Nothing,
//!     }
//! }
//!
//! assert_eq!(lookup("width").map2(lookup("height"), |w, h| w * h), Maybe::Just(12));
//! assert_eq!(lookup("width").map2(lookup("depth"), |w, d| w * d), Maybe::Nothing);
//!
//! let label = lookup("depth").fold(|d| d.to_string(), || "unknown".to_string());
//! assert_eq!(label, "unknown");
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// An optional value: `Just(a)` or `Nothing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// No value.
    #[default]
    Nothing,
    /// A present value.
    Just(A),
}

impl<A> Maybe<A> {
    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns a reference to the value, if present.
    #[inline]
    pub const fn value(&self) -> Option<&A> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Borrows the value, turning `&Maybe<A>` into `Maybe<&A>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Returns the value, or `default` if there is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofunk::data::Maybe;
    ///
    /// assert_eq!(Maybe::Just(3).get_or_else(0), 3);
    /// assert_eq!(Maybe::Nothing.get_or_else(0), 0);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns `self` if it holds a value, otherwise the result of `alternative`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => alternative(),
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofunk::data::Maybe;
    ///
    /// assert_eq!(Maybe::Just(4).filter(|n| n % 2 == 0), Maybe::Just(4));
    /// assert_eq!(Maybe::Just(3).filter(|n| n % 2 == 0), Maybe::Nothing);
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }

    /// Eliminates the `Maybe`: `on_just` receives the value, `on_nothing`
    /// runs when empty.
    #[inline]
    pub fn fold<T, J, N>(self, on_just: J, on_nothing: N) -> T
    where
        J: FnOnce(A) -> T,
        N: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    /// Runs one of two handlers for its side effect.
    #[inline]
    pub fn match_with<J, N>(self, on_just: J, on_nothing: N)
    where
        J: FnOnce(A),
        N: FnOnce(),
    {
        self.fold(on_just, on_nothing);
    }
}

impl<A> Maybe<Maybe<A>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<A> {
        match self {
            Self::Just(inner) => inner,
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Just(a), Maybe::Just(b)) => Maybe::Just(function(a, b)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Just(a), Maybe::Just(b), Maybe::Just(c)) => Maybe::Just(function(a, b, c)),
            _ => Maybe::Nothing,
        }
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => write!(formatter, "Nothing"),
        }
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(option: Option<A>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        maybe.into_option()
    }
}
