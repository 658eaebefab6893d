//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends [`Functor`] with:
//!
//! - `pure`: lift a plain value into the context
//! - `map2` / `map3`: combine independent computations with a function
//! - `apply`: apply a function held in the context to a value in the context
//!
//! Because the operands of `map2` are independent, an instance is free to
//! inspect all of them before deciding the result. Every container here
//! stops at the first failure except
//! [`Validation`](crate::data::Validation), which combines the errors of
//! all failed operands through [`Semigroup`](super::Semigroup).
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use endofunk::data::Maybe;
//! use endofunk::typeclass::Applicative;
//!
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, Maybe::Just(42));
//!
//! let sum = Maybe::Just(1).map2(Maybe::Just(2), |a, b| a + b);
//! assert_eq!(sum, Maybe::Just(3));
//!
//! assert_eq!(Maybe::Just(1).product(Maybe::Just("a")), Maybe::Just((1, "a")));
//! ```

use super::functor::Functor;

/// A type class for types that support lifting values and combining contexts.
///
/// # Examples
///
/// ```rust
/// use endofunk::data::Either;
/// use endofunk::typeclass::Applicative;
///
/// let a: Either<&str, i32> = Either::Right(3);
/// let b: Either<&str, i32> = Either::Right(4);
/// assert_eq!(a.map2(b, |x, y| x + y), Either::Right(7));
///
/// let a: Either<&str, i32> = Either::Left("first");
/// let b: Either<&str, i32> = Either::Left("second");
/// assert_eq!(a.map2(b, |x, y| x + y), Either::Left("first"));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofunk::data::Outcome;
    /// use endofunk::typeclass::Applicative;
    ///
    /// let x: Outcome<i32, String> = <Outcome<(), String>>::pure(42);
    /// assert_eq!(x, Outcome::Success(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// The function is called only when both values are present.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofunk::data::Maybe;
    /// use endofunk::typeclass::Applicative;
    ///
    /// let sum = Maybe::Just(1).map3(Maybe::Just(2), Maybe::Just(3), |a, b, c| a + b + c);
    /// assert_eq!(sum, Maybe::Just(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    ///
    /// This is equivalent to `map2(other, |a, b| (a, b))`.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates two applicatives and keeps the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofunk::data::Maybe;
    /// use endofunk::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::Just(1).product_left(Maybe::Just(2)), Maybe::Just(1));
    /// assert_eq!(Maybe::Just(1).product_left(Maybe::<i32>::Nothing), Maybe::Nothing);
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates two applicatives and keeps the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// The receiver holds the function, `other` holds its argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofunk::data::Identity;
    /// use endofunk::typeclass::Applicative;
    ///
    /// let function: Identity<fn(i32) -> i32> = Identity::new(|x| x + 1);
    /// assert_eq!(function.apply(Identity::new(5)), Identity::new(6));
    /// ```
    #[inline]
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}
