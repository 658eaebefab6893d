//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `Either<L, _>` as type
//! constructors directly. [`TypeConstructor`] recovers that ability with a
//! generic associated type, which is what lets [`Functor`](super::Functor),
//! [`Applicative`](super::Applicative) and [`Monad`](super::Monad) be written
//! once for all of the container types in [`data`](crate::data).
//!
//! # Example
//!
//! ```rust
//! use endofunk::data::Maybe;
//! use endofunk::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let nothing: Maybe<String> = empty_like(Maybe::Just(42));
//! assert_eq!(nothing, Maybe::Nothing);
//! ```

/// A trait representing a type constructor applied to one type argument.
///
/// # Associated Types
///
/// - `Inner`: The type parameter the constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`. Any other type
///   parameters (the error of `Either`, the environment of `Reader`) stay
///   fixed.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
