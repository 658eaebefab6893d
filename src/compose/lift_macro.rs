//! Lifting macros for plain functions.
//!
//! [`lift_a!`](crate::lift_a) and [`lift_m!`](crate::lift_m) take an
//! ordinary N-argument function and N containers, and return one container
//! holding the function's result. They differ in how failures propagate:
//!
//! - `lift_a!` pairs the arguments with `Applicative::product`, so every
//!   argument is inspected and `Validation` reports all of their errors.
//! - `lift_m!` nests `Monad::flat_map`, so it stops at the first failed
//!   argument and later arguments are never examined.
//!
//! Both work for any type implementing the traits. `Reader` has its own
//! inherent `map2` / `map3` instead.

/// Lifts an N-argument function over N applicative values.
///
/// `lift_a!(f; a, b, c)` expands to
/// `a.product(b).product(c).fmap(|((x, y), z)| f(x, y, z))`.
///
/// # Syntax
///
/// - `lift_a!(f; a)` - `a.fmap(f)`
/// - `lift_a!(f; a, b, ...)` - any number of further arguments
///
/// # Examples
///
/// ```rust
/// use endofunk::data::Validation;
/// use endofunk::lift_a;
///
/// let name: Validation<&str, Vec<&str>> = Validation::fail("name missing");
/// let age: Validation<u8, Vec<&str>> = Validation::Valid(40);
/// let email: Validation<&str, Vec<&str>> = Validation::fail("email missing");
///
/// let user = lift_a!(|n, a, e| (n, a, e); name, age, email);
/// assert_eq!(user, Validation::Invalid(vec!["name missing", "email missing"]));
/// ```
///
/// ```rust
/// use endofunk::data::Maybe;
/// use endofunk::lift_a;
///
/// fn volume(width: u32, height: u32, depth: u32) -> u32 {
///     width * height * depth
/// }
///
/// assert_eq!(lift_a!(volume; Maybe::Just(2), Maybe::Just(3), Maybe::Just(4)), Maybe::Just(24));
/// ```
#[macro_export]
macro_rules! lift_a {
    (@product $function:expr; [$combined:expr] [$($pattern:tt)*] [$($argument:ident)*];) => {
        $crate::typeclass::Functor::fmap($combined, |$($pattern)*| ($function)($($argument),*))
    };

    (
        @product $function:expr;
        [$combined:expr] [$($pattern:tt)*] [$($argument:ident)*];
        $next:expr $(, $rest:expr)*
    ) => {
        $crate::lift_a!(
            @product $function;
            [$crate::typeclass::Applicative::product($combined, $next)]
            [($($pattern)*, value)]
            [$($argument)* value];
            $($rest),*
        )
    };

    ($function:expr; $first:expr $(,)?) => {
        $crate::typeclass::Functor::fmap($first, $function)
    };

    ($function:expr; $first:expr, $($rest:expr),+ $(,)?) => {
        $crate::lift_a!(@product $function; [$first] [value] [value]; $($rest),+)
    };
}

/// Lifts an N-argument function over N monadic values.
///
/// `lift_m!(f; a, b, c)` expands to
/// `a.flat_map(|x| b.flat_map(|y| c.fmap(|z| f(x, y, z))))`. Evaluation
/// stops at the first failure, and the containers after it are never
/// inspected.
///
/// # Syntax
///
/// - `lift_m!(f; a)` - `a.fmap(f)`
/// - `lift_m!(f; a, b, ...)` - any number of further arguments
///
/// # Examples
///
/// ```rust
/// use endofunk::data::Validation;
/// use endofunk::lift_m;
///
/// let name: Validation<&str, Vec<&str>> = Validation::fail("name missing");
/// let email: Validation<&str, Vec<&str>> = Validation::fail("email missing");
///
/// let user = lift_m!(|n, e| (n, e); name, email);
/// assert_eq!(user, Validation::Invalid(vec!["name missing"]));
/// ```
///
/// ```rust
/// use endofunk::data::Outcome;
/// use endofunk::lift_m;
///
/// let total = lift_m!(
///     |a: i32, b: i32, c: i32| a + b + c;
///     Outcome::<i32, String>::Success(1),
///     Outcome::Success(2),
///     Outcome::Success(3)
/// );
/// assert_eq!(total, Outcome::Success(6));
/// ```
#[macro_export]
macro_rules! lift_m {
    (@bind $function:expr; [$($argument:ident)*]; $last:expr) => {
        $crate::typeclass::Functor::fmap($last, move |value| ($function)($($argument,)* value))
    };

    (@bind $function:expr; [$($argument:ident)*]; $next:expr, $($rest:expr),+) => {
        $crate::typeclass::Monad::flat_map($next, move |value| {
            $crate::lift_m!(@bind $function; [$($argument)* value]; $($rest),+)
        })
    };

    ($function:expr; $first:expr $(,)?) => {
        $crate::typeclass::Functor::fmap($first, $function)
    };

    ($function:expr; $first:expr, $($rest:expr),+ $(,)?) => {
        $crate::lift_m!(@bind $function; []; $first, $($rest),+)
    };
}
