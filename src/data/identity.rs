//! Identity type - a container that adds no behavior.
//!
//! `Identity<A>` wraps exactly one value. Mapping applies the function,
//! `flat_map` applies it and unwraps the result, and nothing can fail. It is
//! the simplest model of the type class laws and the neutral element when
//! writing code generic over a monad.

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// Wraps a single value without adding any effect.
///
/// # Examples
///
/// ```rust
/// use endofunk::data::Identity;
/// use endofunk::typeclass::Monad;
///
/// let wrapped = Identity::new(20).flat_map(|n| Identity::new(n + 1));
/// assert_eq!(wrapped.fold(|n| n * 2), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// Returns a mutable reference to the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofunk::data::Identity;
    ///
    /// let mut counter = Identity::new(1);
    /// *counter.as_inner_mut() += 1;
    /// assert_eq!(counter, Identity::new(2));
    /// ```
    #[inline]
    pub const fn as_inner_mut(&mut self) -> &mut A {
        &mut self.0
    }

    /// Borrows the value, turning `&Identity<A>` into `Identity<&A>`.
    #[inline]
    pub const fn as_ref(&self) -> Identity<&A> {
        Identity(&self.0)
    }

    /// Applies `function` to the value and returns its result unwrapped.
    #[inline]
    pub fn fold<T, F>(self, function: F) -> T
    where
        F: FnOnce(A) -> T,
    {
        function(self.0)
    }

    /// Hands the value to `function` for its side effect.
    #[inline]
    pub fn match_with<F>(self, function: F)
    where
        F: FnOnce(A),
    {
        function(self.0);
    }
}

impl<A> Identity<Identity<A>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Identity<A> {
        self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }
}

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Identity<B>, third: Identity<C>, function: F) -> Identity<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Identity(function(self.0, second.0, third.0))
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

impl<A: fmt::Display> fmt::Display for Identity<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Identity({})", self.0)
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
