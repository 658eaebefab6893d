//! Bifunctor type class - mapping over the failure and the success side.
//!
//! The two-case containers ([`Either`](crate::data::Either),
//! [`Outcome`](crate::data::Outcome), [`Validation`](crate::data::Validation))
//! carry a value on each side. `Functor::fmap` only reaches the success side;
//! `Bifunctor` reaches both.
//!
//! Parameter order is always failure first, success second, so for
//! `Outcome<T, E>` the implementation is `Bifunctor<E, T>` and `second`
//! coincides with `Functor::fmap`.
//!
//! # Laws
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! bf.bimap(f, g) == bf.first(f).second(g)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use endofunk::data::Validation;
//! use endofunk::typeclass::Bifunctor;
//!
//! let invalid: Validation<i32, Vec<&str>> = Validation::Invalid(vec!["a", "b"]);
//! assert_eq!(invalid.first(|errors| errors.len()), Validation::Invalid(2));
//! ```

/// A type class for two-parameter types that can be mapped on both sides.
pub trait Bifunctor<A, B> {
    /// The same type constructor applied to new parameters.
    ///
    /// For `Either<L, R>`, `Target<C, D> = Either<C, D>`; for `Outcome<T, E>`,
    /// `Target<C, D> = Outcome<D, C>`.
    type Target<C, D>;

    /// Applies one function to each side, whichever is present.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the failure side only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the success side only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }
}
