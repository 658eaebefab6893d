//! Kleisli composition.
//!
//! A Kleisli arrow is a function `A -> M<B>` for some monad `M`. Two such
//! arrows compose into `A -> M<C>` by running the first and feeding its
//! value to the second through `flat_map`.

use crate::typeclass::{Monad, TypeConstructor};

/// Composes two Kleisli arrows left to right: `first` runs, then `second`
/// receives its value.
///
/// If `first` fails, `second` is never called.
///
/// # Examples
///
/// ```rust
/// use endofunk::compose::kleisli;
/// use endofunk::data::Maybe;
///
/// fn parse(text: String) -> Maybe<i32> {
///     text.parse::<i32>().ok().into()
/// }
///
/// fn reciprocal(n: i32) -> Maybe<f64> {
///     if n == 0 { Maybe::Nothing } else { Maybe::Just(1.0 / f64::from(n)) }
/// }
///
/// let parse_reciprocal = kleisli(parse, reciprocal);
/// assert_eq!(parse_reciprocal("4".to_string()), Maybe::Just(0.25));
/// assert_eq!(parse_reciprocal("0".to_string()), Maybe::Nothing);
/// assert_eq!(parse_reciprocal("x".to_string()), Maybe::Nothing);
/// ```
pub fn kleisli<A, B, C, M, MC, F, G>(first: F, second: G) -> impl Fn(A) -> MC
where
    M: Monad<Inner = B> + TypeConstructor<WithType<C> = MC>,
    F: Fn(A) -> M,
    G: Fn(B) -> MC,
{
    move |input| first(input).flat_map::<C, _>(&second)
}

/// Turns a Kleisli arrow `A -> M<B>` into a function `M<A> -> M<B>`.
///
/// # Examples
///
/// ```rust
/// use endofunk::compose::lifted_flat_map;
/// use endofunk::data::Outcome;
///
/// let checked_halve = lifted_flat_map(|n: i32| {
///     if n % 2 == 0 {
///         Outcome::Success(n / 2)
///     } else {
///         Outcome::Failure(format!("{n} is odd"))
///     }
/// });
///
/// assert_eq!(checked_halve(Outcome::Success(10)), Outcome::Success(5));
/// assert_eq!(checked_halve(Outcome::Success(3)), Outcome::Failure("3 is odd".to_string()));
/// ```
pub fn lifted_flat_map<A, B, MA, MB, F>(function: F) -> impl Fn(MA) -> MB
where
    MA: Monad<Inner = A> + TypeConstructor<WithType<B> = MB>,
    F: Fn(A) -> MB,
{
    move |container| container.flat_map::<B, _>(&function)
}
