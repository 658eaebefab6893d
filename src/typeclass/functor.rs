//! Functor type class - mapping over container values.
//!
//! A `Functor` lets a function transform the value inside a container
//! without changing the container's shape: a `Nothing` stays `Nothing`, a
//! `Left` stays `Left`, an `Invalid` keeps its errors.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! To map without consuming, borrow first: every container but `Reader` has an
//! `as_ref` that turns `&F<A>` into `F<&A>`.
//!
//! # Examples
//!
//! ```rust
//! use endofunk::data::Maybe;
//! use endofunk::typeclass::Functor;
//!
//! let just: Maybe<i32> = Maybe::Just(5);
//! assert_eq!(just.fmap(|n| n.to_string()), Maybe::Just("5".to_string()));
//!
//! let nothing: Maybe<i32> = Maybe::Nothing;
//! assert_eq!(nothing.fmap(|n| n.to_string()), Maybe::Nothing);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// # Examples
///
/// ```rust
/// use endofunk::data::Either;
/// use endofunk::typeclass::Functor;
///
/// let right: Either<String, i32> = Either::Right(20);
/// assert_eq!(right.fmap(|n| n + 1), Either::Right(21));
///
/// let left: Either<String, i32> = Either::Left("boom".to_string());
/// assert_eq!(left.fmap(|n| n + 1), Either::Left("boom".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofunk::data::Identity;
    /// use endofunk::typeclass::Functor;
    ///
    /// assert_eq!(Identity::new(5).fmap(|n| n * 2), Identity::new(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofunk::data::Outcome;
    /// use endofunk::typeclass::Functor;
    ///
    /// let done: Outcome<i32, String> = Outcome::Success(5);
    /// assert_eq!(done.void(), Outcome::Success(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}
