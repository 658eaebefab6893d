//! Property-based tests for Monad laws.
//!
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! `Reader` has no `PartialEq`; its laws compare the values produced by
//! running both sides against the same environment.

use endofunk::data::{Either, Identity, Maybe, Outcome, Reader, Validation};
use endofunk::typeclass::{Applicative, Monad};
use proptest::prelude::*;

fn halve_maybe(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing }
}

fn shrink_maybe(n: i32) -> Maybe<i32> {
    if n.unsigned_abs() < 1_000 { Maybe::Just(n.wrapping_sub(1)) } else { Maybe::Nothing }
}

fn halve_either(n: i32) -> Either<String, i32> {
    if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left(format!("{n} is odd")) }
}

fn positive_either(n: i32) -> Either<String, i32> {
    if n > 0 { Either::Right(n) } else { Either::Left(format!("{n} is not positive")) }
}

fn halve_outcome(n: i32) -> Outcome<i32, String> {
    if n % 2 == 0 { Outcome::Success(n / 2) } else { Outcome::Failure(format!("{n} is odd")) }
}

fn positive_outcome(n: i32) -> Outcome<i32, String> {
    Outcome::from(Result::from(positive_either(n)))
}

fn halve_validation(n: i32) -> Validation<i32, Vec<String>> {
    if n % 2 == 0 { Validation::Valid(n / 2) } else { Validation::fail(format!("{n} is odd")) }
}

fn positive_validation(n: i32) -> Validation<i32, Vec<String>> {
    Validation::ensure(n, |n| *n > 0, format!("{n} is not positive"))
}

// =============================================================================
// Maybe<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        prop_assert_eq!(<Maybe<()>>::pure(value).flat_map(halve_maybe), halve_maybe(value));
    }

    #[test]
    fn prop_maybe_right_identity(value in any::<Option<i32>>()) {
        let value = Maybe::from(value);
        prop_assert_eq!(value.flat_map(Maybe::Just), value);
    }

    #[test]
    fn prop_maybe_associativity(value in any::<Option<i32>>()) {
        let value = Maybe::from(value);
        let left = value.flat_map(halve_maybe).flat_map(shrink_maybe);
        let right = value.flat_map(|x| halve_maybe(x).flat_map(shrink_maybe));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Either<L, R>
// =============================================================================

proptest! {
    #[test]
    fn prop_either_left_identity(value in any::<i32>()) {
        let left: Either<String, i32> = Either::Right(value).flat_map(halve_either);
        prop_assert_eq!(left, halve_either(value));
    }

    #[test]
    fn prop_either_right_identity(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        let value = Either::from(value);
        prop_assert_eq!(value.clone().flat_map(Either::Right), value);
    }

    #[test]
    fn prop_either_associativity(value in any::<i32>()) {
        let start: Either<String, i32> = Either::Right(value);
        let left = start.clone().flat_map(halve_either).flat_map(positive_either);
        let right = start.flat_map(|x| halve_either(x).flat_map(positive_either));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Outcome<T, E>
// =============================================================================

proptest! {
    #[test]
    fn prop_outcome_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Outcome::Success(value).flat_map(halve_outcome), halve_outcome(value));
    }

    #[test]
    fn prop_outcome_right_identity(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        let value = Outcome::from(value);
        prop_assert_eq!(value.clone().flat_map(Outcome::Success), value);
    }

    #[test]
    fn prop_outcome_associativity(value in any::<i32>()) {
        let start: Outcome<i32, String> = Outcome::Success(value);
        let left = start.clone().flat_map(halve_outcome).flat_map(positive_outcome);
        let right = start.flat_map(|x| halve_outcome(x).flat_map(positive_outcome));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Identity<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_left_identity(value in any::<i32>()) {
        let function = |n: i32| Identity::new(n.wrapping_mul(3));
        prop_assert_eq!(Identity::new(value).flat_map(function), function(value));
    }

    #[test]
    fn prop_identity_right_identity(value in any::<i32>()) {
        let wrapped = Identity::new(value);
        prop_assert_eq!(wrapped.flat_map(<Identity<()>>::pure), wrapped);
    }

    #[test]
    fn prop_identity_associativity(value in any::<i32>()) {
        let function1 = |n: i32| Identity::new(n.wrapping_add(1));
        let function2 = |n: i32| Identity::new(i64::from(n) * 2);
        let left = Identity::new(value).flat_map(function1).flat_map(function2);
        let right = Identity::new(value).flat_map(|x| function1(x).flat_map(function2));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Validation<T, E>
// =============================================================================

proptest! {
    #[test]
    fn prop_validation_left_identity(value in any::<i32>()) {
        let left = Validation::Valid(value).flat_map(halve_validation);
        prop_assert_eq!(left, halve_validation(value));
    }

    #[test]
    fn prop_validation_right_identity(value in any::<i32>(), failed in any::<bool>()) {
        let value: Validation<i32, Vec<String>> =
            if failed { Validation::fail(value.to_string()) } else { Validation::Valid(value) };
        prop_assert_eq!(value.clone().flat_map(Validation::Valid), value);
    }

    #[test]
    fn prop_validation_associativity(value in any::<i32>()) {
        let start: Validation<i32, Vec<String>> = Validation::Valid(value);
        let left = start.clone().flat_map(halve_validation).flat_map(positive_validation);
        let right = start.flat_map(|x| halve_validation(x).flat_map(positive_validation));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_validation_flat_map_reports_one_error(value in any::<i32>()) {
        let result = Validation::Valid(value)
            .flat_map(halve_validation)
            .flat_map(positive_validation);
        if let Validation::Invalid(errors) = result {
            prop_assert_eq!(errors.len(), 1);
        }
    }
}

// =============================================================================
// Reader<R, A>
// =============================================================================

proptest! {
    #[test]
    fn prop_reader_left_identity(value in -1_000i32..1_000, environment in -1_000i32..1_000) {
        let function = |a: i32| Reader::new(move |environment: i32| a + environment);
        let left: Reader<i32, i32> = Reader::pure(value).flat_map(function);
        prop_assert_eq!(left.run(environment), function(value).run(environment));
    }

    #[test]
    fn prop_reader_right_identity(environment in any::<i32>()) {
        let reader: Reader<i32, i32> = Reader::new(|environment: i32| environment.wrapping_mul(5));
        let right_identity = reader.clone().flat_map(Reader::pure);
        prop_assert_eq!(right_identity.run(environment), reader.run(environment));
    }

    #[test]
    fn prop_reader_associativity(environment in -1_000i32..1_000) {
        let function1 = |a: i32| Reader::new(move |environment: i32| a + environment);
        let function2 = |b: i32| Reader::new(move |environment: i32| b * environment);
        let reader: Reader<i32, i32> = Reader::ask();

        let left = reader.clone().flat_map(function1).flat_map(function2);
        let right = reader.flat_map(move |x| function1(x).flat_map(function2));

        prop_assert_eq!(left.run(environment), right.run(environment));
    }

    #[test]
    fn prop_reader_ask_returns_environment(environment in any::<i64>()) {
        prop_assert_eq!(Reader::<i64, i64>::ask().run(environment), environment);
    }

    #[test]
    fn prop_reader_local_identity(environment in any::<i32>()) {
        let reader: Reader<i32, i32> = Reader::new(|environment: i32| environment.wrapping_sub(3));
        let local = Reader::local(|environment| environment, reader.clone());
        prop_assert_eq!(local.run(environment), reader.run(environment));
    }
}
