#![cfg(all(feature = "typeclass", feature = "outcome"))]
//! Property-based tests for Monad laws and flattening.
//!
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! Binding yields the variant of the step that ran, so right identity on
//! `Either` holds exactly for plain successes and every error variant, and
//! up to the success payload for `Created` and `Deleted`.

use outcomes::control::{Either, Maybe};
use outcomes::outcome::Outcome;
use outcomes::typeclass::{Applicative, Monad};
use proptest::prelude::*;

fn error_variant_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<String>().prop_map(Either::Left),
        any::<String>().prop_map(Either::NotFound),
        any::<String>().prop_map(Either::Unauthorized),
    ]
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        error_variant_strategy(),
        any::<i32>().prop_map(Either::Right),
        any::<i32>().prop_map(Either::Created),
        any::<i32>().prop_map(Either::Deleted),
    ]
}

fn halve(n: i32) -> Either<String, i32> {
    if n % 2 == 0 {
        Either::Created(n / 2)
    } else {
        Either::NotFound(format!("{n} is odd"))
    }
}

fn shrink(n: i32) -> Either<String, i32> {
    if n > 0 {
        Either::Right(n.wrapping_sub(1))
    } else {
        Either::Unauthorized("non-positive".to_string())
    }
}

fn maybe_halve(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() }
}

fn maybe_decrement(n: i32) -> Maybe<i32> {
    n.checked_sub(1).into()
}

// =============================================================================
// Either<L, R>
// =============================================================================

proptest! {
    #[test]
    fn prop_either_left_identity(value in any::<i32>()) {
        let lifted: Either<String, i32> = <Either<String, ()>>::pure(value);
        prop_assert_eq!(Monad::flat_map(lifted, halve), halve(value));
    }

    #[test]
    fn prop_either_right_identity_for_plain_and_errors(
        value in prop_oneof![error_variant_strategy(), any::<i32>().prop_map(Either::Right)]
    ) {
        let rebound = Monad::flat_map(value.clone(), <Either<String, i32>>::pure);
        prop_assert_eq!(rebound, value);
    }

    #[test]
    fn prop_either_right_identity_keeps_payload(value in either_strategy()) {
        let rebound = Monad::flat_map(value.clone(), <Either<String, i32>>::pure);
        prop_assert_eq!(rebound.side(), value.side());
        prop_assert_eq!(rebound.into_options(), value.into_options());
    }

    #[test]
    fn prop_either_associativity(value in either_strategy()) {
        let left = value.clone().flat_map(halve).flat_map(shrink);
        let right = value.flat_map(|x| halve(x).flat_map(shrink));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_flat_map_is_map_then_flatten(value in either_strategy()) {
        let bound = value.clone().flat_map(halve);
        let mapped = value.map(halve).flatten();
        prop_assert_eq!(bound, mapped);
    }

    #[test]
    fn prop_either_flatten_error_side(value in either_strategy()) {
        let nested: Either<Either<String, i32>, i32> = Either::Left(value.clone());
        prop_assert_eq!(nested.flatten_left(), value);
    }
}

// =============================================================================
// Maybe<T>
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        let lifted: Maybe<i32> = <Maybe<()>>::pure(value);
        prop_assert_eq!(lifted.flat_map(maybe_halve), maybe_halve(value));
    }

    #[test]
    fn prop_maybe_right_identity(value in any::<Option<i32>>().prop_map(Maybe::from)) {
        prop_assert_eq!(value.flat_map(Maybe::just), value);
    }

    #[test]
    fn prop_maybe_associativity(value in any::<Option<i32>>().prop_map(Maybe::from)) {
        let left = value.flat_map(maybe_halve).flat_map(maybe_decrement);
        let right = value.flat_map(|x| maybe_halve(x).flat_map(maybe_decrement));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_maybe_flatten(value in any::<Option<i32>>().prop_map(Maybe::from)) {
        prop_assert_eq!(Maybe::just(value).flatten(), value);
        prop_assert_eq!(Maybe::<Maybe<i32>>::nothing().flatten(), Maybe::nothing());
    }
}

// =============================================================================
// Outcome<E>
// =============================================================================

proptest! {
    #[test]
    fn prop_outcome_flatten_returns_inner(error in any::<i32>(), inner_fails in any::<bool>()) {
        let inner = if inner_fails { Outcome::failure(error) } else { Outcome::success() };
        prop_assert_eq!(Outcome::failure(inner).flatten(), inner);
        prop_assert_eq!(Outcome::<Outcome<i32>>::success().flatten(), Outcome::success());
    }
}
