//! Validation type - checks that report every failure.
//!
//! `Validation<T, E>` is `Valid(T)` or `Invalid(E)`. Its shape matches
//! [`Either`](super::Either), but the [`Applicative`] instance differs.
//! When `map2`, `map3`, `product` or `apply` meet two `Invalid` operands,
//! they do not stop at the first. They merge both errors with
//! [`Semigroup::combine`], left operand first. A form built from ten
//! independent checks therefore reports every failed check at once.
//!
//! [`Monad::flat_map`] still stops at the first `Invalid`: the next step
//! needs the previous value, and an `Invalid` has none.
//! [`Validation::apply_fail_fast`] offers the same short-circuit for
//! function application.
//!
//! Errors are usually collected in a `Vec`; [`Validation::fail`] and
//! [`Validation::ensure`] build single-error validations of that shape.
//!
//! # Examples
//!
//! ```rust
//! use endofunk::data::Validation;
//! use endofunk::typeclass::Applicative;
//!
//! #[derive(Debug, PartialEq)]
//! struct Account {
//!     name: String,
//!     age: u32,
//! }
//!
//! fn check_name(name: &str) -> Validation<String, Vec<String>> {
//!     Validation::ensure(name.to_string(), |n| !n.is_empty(), "name is empty".to_string())
//! }
//!
//! fn check_age(age: u32) -> Validation<u32, Vec<String>> {
//!     Validation::ensure(age, |a| *a >= 18, format!("{age} is under 18"))
//! }
//!
//! let account = check_name("ada").map2(check_age(36), |name, age| Account { name, age });
//! assert_eq!(account, Validation::Valid(Account { name: "ada".to_string(), age: 36 }));
//!
//! let account = check_name("").map2(check_age(12), |name, age| Account { name, age });
//! assert_eq!(
//!     account,
//!     Validation::Invalid(vec!["name is empty".to_string(), "12 is under 18".to_string()])
//! );
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Bifunctor, Functor, Monad, Semigroup, TypeConstructor};

/// The result of a check: `Valid(T)` or `Invalid(E)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<T, E> {
    /// The check passed.
    Valid(T),
    /// The check failed with these errors.
    Invalid(E),
}

impl<T, E> Validation<T, E> {
    /// Returns `true` for `Valid`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` for `Invalid`.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns the valid value, if any.
    #[inline]
    pub fn valid(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Returns the errors, if any.
    #[inline]
    pub fn invalid(self) -> Option<E> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Borrows both sides.
    #[inline]
    pub const fn as_ref(&self) -> Validation<&T, &E> {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Transforms the errors, leaving a valid value untouched.
    #[inline]
    pub fn map_invalid<G, F>(self, function: F) -> Validation<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => Validation::Invalid(function(errors)),
        }
    }

    /// Eliminates the validation. The valid handler comes first.
    #[inline]
    pub fn fold<R, F, G>(self, on_valid: F, on_invalid: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Self::Valid(value) => on_valid(value),
            Self::Invalid(errors) => on_invalid(errors),
        }
    }

    /// Runs one of two handlers for its side effect.
    #[inline]
    pub fn match_with<F, G>(self, on_valid: F, on_invalid: G)
    where
        F: FnOnce(T),
        G: FnOnce(E),
    {
        self.fold(on_valid, on_invalid);
    }

    /// `Ok` becomes `Valid` and `Err` becomes `Invalid`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(errors) => Self::Invalid(errors),
        }
    }

    /// `Valid` becomes `Ok` and `Invalid` becomes `Err`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Applies the held function without accumulating errors.
    ///
    /// If `self` is `Invalid` its errors are returned and `other` is never
    /// inspected; otherwise the function is mapped over `other`. No
    /// [`Semigroup`] is needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofunk::data::Validation;
    ///
    /// let function: Validation<fn(i32) -> i32, &str> = Validation::Invalid("no function");
    /// let argument: Validation<i32, &str> = Validation::Invalid("no argument");
    /// assert_eq!(function.apply_fail_fast(argument), Validation::Invalid("no function"));
    /// ```
    #[inline]
    pub fn apply_fail_fast<B, Output>(self, other: Validation<B, E>) -> Validation<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        match self {
            Self::Valid(function) => match other {
                Validation::Valid(value) => Validation::Valid(function(value)),
                Validation::Invalid(errors) => Validation::Invalid(errors),
            },
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }
}

impl<T, E> Validation<T, Vec<E>> {
    /// A validation failed with the single error `error`.
    #[inline]
    pub fn fail(error: E) -> Self {
        Self::Invalid(vec![error])
    }

    /// `Valid(value)` if `predicate` accepts it, `fail(error)` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofunk::data::Validation;
    ///
    /// assert_eq!(Validation::ensure(4, |n| n % 2 == 0, "odd"), Validation::Valid(4));
    /// assert_eq!(Validation::ensure(3, |n| n % 2 == 0, "odd"), Validation::Invalid(vec!["odd"]));
    /// ```
    #[inline]
    pub fn ensure<P>(value: T, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) {
            Self::Valid(value)
        } else {
            Self::fail(error)
        }
    }

    /// Returns an object that implements [`Display`](fmt::Display) for an
    /// error list, rendering each error with its own `Display`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endofunk::data::Validation;
    ///
    /// let invalid: Validation<u8, Vec<&str>> = Validation::Invalid(vec!["too short", "no digit"]);
    /// assert_eq!(invalid.display().to_string(), "Invalid([too short, no digit])");
    /// ```
    #[inline]
    pub const fn display(&self) -> ErrorListDisplay<'_, T, E> {
        ErrorListDisplay { validation: self }
    }
}

/// Renders a `Validation<T, Vec<E>>` as `Valid(value)` or `Invalid([a, b])`.
///
/// Created by [`Validation::display`].
pub struct ErrorListDisplay<'a, T, E> {
    validation: &'a Validation<T, Vec<E>>,
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for ErrorListDisplay<'_, T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.validation {
            Validation::Valid(value) => write!(formatter, "Valid({value})"),
            Validation::Invalid(errors) => {
                formatter.write_str("Invalid([")?;
                for (index, error) in errors.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{error}")?;
                }
                formatter.write_str("])")
            }
        }
    }
}

impl<T, E> Validation<Validation<T, E>, E> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Validation<T, E> {
        match self {
            Self::Valid(inner) => inner,
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }
}

impl<T, E> TypeConstructor for Validation<T, E> {
    type Inner = T;
    type WithType<B> = Validation<B, E>;
}

impl<T, E> Functor for Validation<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Validation<B, E>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Valid(value) => Validation::Valid(function(value)),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }
}

impl<T, E: Semigroup> Applicative for Validation<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Validation<B, E> {
        Validation::Valid(value)
    }

    fn map2<B, C, F>(self, other: Validation<B, E>, function: F) -> Validation<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Valid(a), Validation::Valid(b)) => Validation::Valid(function(a, b)),
            (Self::Invalid(left), Validation::Invalid(right)) => {
                Validation::Invalid(left.combine(right))
            }
            (Self::Invalid(errors), Validation::Valid(_))
            | (Self::Valid(_), Validation::Invalid(errors)) => Validation::Invalid(errors),
        }
    }

    fn map3<B, C, D, F>(
        self,
        second: Validation<B, E>,
        third: Validation<C, E>,
        function: F,
    ) -> Validation<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        self.product(second).map2(third, |(a, b), c| function(a, b, c))
    }
}

impl<T, E: Semigroup> Monad for Validation<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Validation<B, E>
    where
        F: FnOnce(T) -> Validation<B, E>,
    {
        match self {
            Self::Valid(value) => function(value),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }
}

impl<T, E> Bifunctor<E, T> for Validation<T, E> {
    type Target<C, D> = Validation<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Validation<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Self::Valid(value) => Validation::Valid(second_function(value)),
            Self::Invalid(errors) => Validation::Invalid(first_function(errors)),
        }
    }
}

/// Collects validations, keeping every error in iteration order.
///
/// # Examples
///
/// ```rust
/// use endofunk::data::Validation;
///
/// let checked: Validation<Vec<i32>, Vec<String>> = ["1", "x", "3", "y"]
///     .iter()
///     .map(|text| {
///         text.parse::<i32>()
///             .map_or_else(|_| Validation::fail(format!("bad: {text}")), Validation::Valid)
///     })
///     .collect();
/// assert_eq!(checked, Validation::Invalid(vec!["bad: x".to_string(), "bad: y".to_string()]));
/// ```
impl<T, E: Semigroup> FromIterator<Validation<T, E>> for Validation<Vec<T>, E> {
    fn from_iter<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Validation<T, E>>,
    {
        iterator
            .into_iter()
            .fold(Self::Valid(Vec::new()), |collected, item| match (collected, item) {
                (Self::Valid(mut values), Validation::Valid(value)) => {
                    values.push(value);
                    Self::Valid(values)
                }
                (Self::Valid(_), Validation::Invalid(errors))
                | (Self::Invalid(errors), Validation::Valid(_)) => Self::Invalid(errors),
                (Self::Invalid(left), Validation::Invalid(right)) => {
                    Self::Invalid(left.combine(right))
                }
            })
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Validation<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(value) => write!(formatter, "Valid({value})"),
            Self::Invalid(errors) => write!(formatter, "Invalid({errors})"),
        }
    }
}

impl<T, E> From<Result<T, E>> for Validation<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Checked = Validation<i32, Vec<&'static str>>;

    #[rstest]
    #[case(Validation::Valid(2), Validation::Valid(3), Validation::Valid(5))]
    #[case(Validation::fail("a"), Validation::Valid(3), Validation::fail("a"))]
    #[case(Validation::Valid(2), Validation::fail("b"), Validation::fail("b"))]
    #[case(Validation::fail("a"), Validation::fail("b"), Validation::Invalid(vec!["a", "b"]))]
    fn map2_accumulates_left_then_right(
        #[case] first: Checked,
        #[case] second: Checked,
        #[case] expected: Checked,
    ) {
        assert_eq!(first.map2(second, |a, b| a + b), expected);
    }

    #[rstest]
    fn map3_collects_all_three_errors_in_order() {
        let result = Checked::fail("first").map3(
            Checked::fail("second"),
            Checked::fail("third"),
            |a, b, c| a + b + c,
        );
        assert_eq!(result, Validation::Invalid(vec!["first", "second", "third"]));
    }

    #[rstest]
    fn map2_does_not_call_the_function_on_failure() {
        let mut called = false;
        let _ = Checked::fail("a").map2(Checked::Valid(1), |a, b| {
            called = true;
            a + b
        });
        assert!(!called);
    }

    #[rstest]
    fn apply_accumulates_function_errors_before_argument_errors() {
        let function: Validation<fn(i32) -> i32, Vec<&str>> = Validation::fail("function");
        assert_eq!(
            function.apply(Checked::fail("argument")),
            Validation::Invalid(vec!["function", "argument"])
        );
    }

    #[rstest]
    fn apply_fail_fast_stops_at_the_function() {
        let function: Validation<fn(i32) -> i32, Vec<&str>> = Validation::fail("function");
        assert_eq!(
            function.apply_fail_fast(Checked::fail("argument")),
            Validation::Invalid(vec!["function"])
        );
    }

    #[rstest]
    fn apply_fail_fast_reports_the_argument_when_the_function_is_valid() {
        let increment =
            || -> Validation<fn(i32) -> i32, Vec<&str>> { Validation::Valid(|n| n + 1) };
        assert_eq!(
            increment().apply_fail_fast(Checked::fail("argument")),
            Validation::fail("argument")
        );
        assert_eq!(increment().apply_fail_fast(Checked::Valid(1)), Validation::Valid(2));
    }

    #[rstest]
    fn flat_map_short_circuits_on_the_first_error() {
        let mut called = false;
        let result = Checked::fail("first").flat_map(|n| {
            called = true;
            Checked::fail("second").fmap(move |m| m + n)
        });
        assert_eq!(result, Validation::Invalid(vec!["first"]));
        assert!(!called);
    }

    #[rstest]
    fn string_errors_concatenate() {
        let left: Validation<i32, String> = Validation::Invalid("name;".to_string());
        let right: Validation<i32, String> = Validation::Invalid("age;".to_string());
        assert_eq!(left.product(right), Validation::Invalid("name;age;".to_string()));
    }

    #[rstest]
    fn collect_keeps_values_when_everything_passes() {
        let collected: Validation<Vec<i32>, Vec<&str>> =
            vec![Checked::Valid(1), Checked::Valid(2)].into_iter().collect();
        assert_eq!(collected, Validation::Valid(vec![1, 2]));
    }

    #[rstest]
    fn collect_accumulates_every_error() {
        let collected: Validation<Vec<i32>, Vec<&str>> =
            vec![Checked::fail("a"), Checked::Valid(2), Checked::fail("b")].into_iter().collect();
        assert_eq!(collected, Validation::Invalid(vec!["a", "b"]));
    }

    #[rstest]
    fn collect_of_nothing_is_valid() {
        let collected: Validation<Vec<i32>, Vec<&str>> =
            Vec::<Checked>::new().into_iter().collect();
        assert_eq!(collected, Validation::Valid(Vec::new()));
    }

    #[rstest]
    fn ensure_checks_the_predicate() {
        assert_eq!(Validation::ensure(10, |n| *n > 5, "small"), Validation::Valid(10));
        assert_eq!(Validation::ensure(1, |n| *n > 5, "small"), Validation::fail("small"));
    }

    #[rstest]
    fn first_maps_the_errors() {
        let invalid = Checked::Invalid(vec!["a", "b"]);
        assert_eq!(invalid.first(|errors| errors.len()), Validation::Invalid(2));
    }

    #[rstest]
    fn fold_sees_the_error_list() {
        let message =
            Checked::Invalid(vec!["a", "b"]).fold(|n| n.to_string(), |errors| errors.join(","));
        assert_eq!(message, "a,b");
    }

    #[rstest]
    fn flatten_keeps_the_inner_errors() {
        let nested: Validation<Checked, Vec<&str>> = Validation::Valid(Checked::fail("inner"));
        assert_eq!(nested.flatten(), Validation::fail("inner"));
    }

    #[rstest]
    fn result_conversions() {
        let validation: Validation<i32, &str> = Err("bad").into();
        assert_eq!(validation.into_result(), Err("bad"));
        assert_eq!(Validation::<i32, &str>::from_result(Ok(1)), Validation::Valid(1));
    }

    #[rstest]
    fn display_names_the_variant() {
        assert_eq!(Validation::<i32, &str>::Valid(1).to_string(), "Valid(1)");
        assert_eq!(Validation::<i32, &str>::Invalid("bad").to_string(), "Invalid(bad)");
    }

    #[rstest]
    #[case(Validation::Valid("value"), "valid handler got value")]
    #[case(Validation::Invalid("oops"), "invalid handler got oops")]
    fn fold_passes_valid_to_the_first_handler(
        #[case] validation: Validation<&str, &str>,
        #[case] expected: &str,
    ) {
        let message = validation.fold(
            |value| format!("valid handler got {value}"),
            |errors| format!("invalid handler got {errors}"),
        );
        assert_eq!(message, expected);
    }

    #[rstest]
    fn match_with_runs_the_valid_handler_first() {
        let mut seen = Vec::new();
        Validation::<&str, &str>::Valid("v").match_with(|value| seen.push(value), |_| {});
        assert_eq!(seen, vec!["v"]);
    }

    #[rstest]
    #[case(Checked::Valid(7), "Valid(7)")]
    #[case(Checked::fail("a"), "Invalid([a])")]
    #[case(Checked::Invalid(vec!["a", "b", "c"]), "Invalid([a, b, c])")]
    #[case(Checked::Invalid(Vec::new()), "Invalid([])")]
    fn display_renders_error_lists(#[case] validation: Checked, #[case] expected: &str) {
        assert_eq!(validation.display().to_string(), expected);
    }
}
