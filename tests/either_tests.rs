//! Integration tests for Either<L, R> and the Attempt alias.
//!
//! Either is a success (`Right`, `Created`, `Deleted`) or an error
//! (`Left`, `NotFound`, `Unauthorized`). Semantic variants behave like their
//! plain counterpart everywhere except equality and kind queries.

#![cfg(feature = "control")]

use outcomes::ErrorList;
use outcomes::control::{Attempt, Either, LeftKind, RightKind, Side};
use outcomes::error::InvalidStateError;
use rstest::rstest;

// =============================================================================
// Construction and Equality
// =============================================================================

#[rstest]
fn named_constructors_match_variants() {
    assert_eq!(Either::<i32, ()>::from_left(1), Either::Left(1));
    assert_eq!(Either::<(), i32>::from_right(1), Either::Right(1));
    assert_eq!(Either::<i32, ()>::not_found(1), Either::NotFound(1));
    assert_eq!(Either::<i32, ()>::unauthorized(1), Either::Unauthorized(1));
    assert_eq!(Either::<(), i32>::created(1), Either::Created(1));
    assert_eq!(Either::<(), i32>::deleted(1), Either::Deleted(1));
}

#[rstest]
fn equality_requires_same_kind() {
    let plain: Either<&str, i32> = Either::Left("x");
    let missing: Either<&str, i32> = Either::NotFound("x");
    assert_ne!(plain, missing);
    assert_eq!(missing, Either::NotFound("x"));

    let created: Either<&str, i32> = Either::Created(1);
    assert_ne!(created, Either::Right(1));
    assert_ne!(created, Either::Deleted(1));
}

#[rstest]
#[case(Either::Unauthorized(0), Side::Left, Some(LeftKind::Unauthorized), None)]
#[case(Either::Deleted(0), Side::Right, None, Some(RightKind::Deleted))]
fn kind_queries(
    #[case] either: Either<u8, u8>,
    #[case] side: Side,
    #[case] left_kind: Option<LeftKind>,
    #[case] right_kind: Option<RightKind>,
) {
    assert_eq!(either.side(), side);
    assert_eq!(either.left_kind(), left_kind);
    assert_eq!(either.right_kind(), right_kind);
}

// =============================================================================
// Mapping Scenarios
// =============================================================================

#[rstest]
fn right_string_mapped_to_length() {
    let either: Either<String, String> = Either::Right("a".to_string());
    assert_eq!(either.map(|x| x.len()), Either::Right(1));
}

#[rstest]
fn left_untouched_by_right_mapping() {
    let either: Attempt<i32> = Attempt::failure([("", "missing")]);
    let mapped = either.map_right(|x| x.to_string());
    assert_eq!(mapped, Either::Left(ErrorList::from([("", "missing")])));
}

#[rstest]
fn semantic_variants_survive_mapping() {
    let deleted: Either<String, i32> = Either::Deleted(2);
    assert_eq!(deleted.map(|x| x * 10), Either::Deleted(20));

    let denied: Either<String, i32> = Either::Unauthorized("nope".to_string());
    assert_eq!(
        denied.map_left(|message| message.len()),
        Either::Unauthorized(4)
    );
}

#[rstest]
fn fold_treats_semantic_variants_like_plain_ones() {
    let describe = |either: Either<&str, i32>| {
        either.fold(|e| format!("error {e}"), |v| format!("value {v}"))
    };
    assert_eq!(describe(Either::NotFound("gone")), "error gone");
    assert_eq!(describe(Either::Created(3)), "value 3");
}

// =============================================================================
// Flattening
// =============================================================================

#[rstest]
fn flatten_success_side() {
    let nested: Either<&str, Either<&str, i32>> = Either::Left("e");
    assert_eq!(nested.flatten(), Either::Left("e"));

    let nested: Either<&str, Either<&str, i32>> = Either::Right(Either::Right(5));
    assert_eq!(nested.flatten(), Either::Right(5));

    let nested: Either<&str, Either<&str, i32>> = Either::Created(Either::Unauthorized("no"));
    assert_eq!(nested.flatten(), Either::Unauthorized("no"));
}

#[rstest]
fn flatten_error_side() {
    let nested: Either<Either<&str, i32>, i32> = Either::Right(5);
    assert_eq!(nested.flatten_left(), Either::Right(5));

    let nested: Either<Either<&str, i32>, i32> = Either::Left(Either::Left("e"));
    assert_eq!(nested.flatten_left(), Either::Left("e"));

    let nested: Either<Either<&str, i32>, i32> = Either::NotFound(Either::Deleted(1));
    assert_eq!(nested.flatten_left(), Either::Deleted(1));
}

#[rstest]
fn flat_map_left_recovers() {
    let missing: Either<&str, i32> = Either::NotFound("id");
    let recovered = missing.flat_map_left(|_| Either::<&str, i32>::Right(0));
    assert_eq!(recovered, Either::Right(0));

    let created: Either<&str, i32> = Either::Created(1);
    let untouched = created.flat_map_left(|_| Either::<&str, i32>::Right(0));
    assert_eq!(untouched, Either::Created(1));
}

#[rstest]
fn flat_map_combine_keeps_source_payload() {
    let order: Either<String, u32> = Either::Right(3);
    let priced = order.flat_map_combine(
        |quantity| Either::Right(quantity * 250),
        |quantity, cents| format!("{quantity} items, {cents} cents"),
    );
    assert_eq!(priced, Either::Right("3 items, 750 cents".to_string()));
}

#[rstest]
fn flat_map_left_combine_keeps_source_error() {
    let failed: Either<String, u32> = Either::Left("timeout".to_string());
    let annotated = failed.flat_map_left_combine(
        |error| Either::Left(error.len()),
        |error, length| format!("{error} ({length})"),
    );
    assert_eq!(annotated, Either::Left("timeout (7)".to_string()));
}

// =============================================================================
// Accessors
// =============================================================================

#[rstest]
fn get_value_or_fail_on_error_side_faults() {
    let either: Either<&str, i32> = Either::NotFound("x");
    assert_eq!(
        either.get_value_or_fail(),
        Err(InvalidStateError {
            operation: "Either::get_value_or_fail",
            found: "left",
        })
    );
}

#[rstest]
fn get_error_or_fail_on_success_side_faults() {
    let either: Either<&str, i32> = Either::Deleted(1);
    let error = either.get_error_or_fail().unwrap_err();
    assert_eq!(
        error.to_string(),
        "Either::get_error_or_fail: Either is right."
    );
}

#[rstest]
fn accessors_succeed_on_matching_side() {
    assert_eq!(Either::<&str, i32>::Created(9).get_value_or_fail(), Ok(9));
    assert_eq!(
        Either::<&str, i32>::Unauthorized("x").get_error_or_fail(),
        Ok("x")
    );
}

#[rstest]
#[case(Either::Right(1), 1, "fallback")]
#[case(Either::Left("e"), 0, "e")]
#[case(Either::Created(5), 5, "fallback")]
fn value_or_and_error_or(
    #[case] either: Either<&str, i32>,
    #[case] value: i32,
    #[case] error: &str,
) {
    assert_eq!(either.value_or(0), value);
    assert_eq!(either.error_or("fallback"), error);
}

#[rstest]
fn into_options_splits_sides() {
    assert_eq!(
        Either::<&str, i32>::NotFound("x").into_options(),
        (Some("x"), None)
    );
    assert_eq!(Either::<&str, i32>::Deleted(1).into_options(), (None, Some(1)));
}

// =============================================================================
// Attempt and Error Rendering
// =============================================================================

#[rstest]
fn not_found_message_renders_without_key() {
    let attempt: Attempt<i32> = Attempt::not_found_message("missing");
    assert_eq!(attempt.left_kind(), Some(LeftKind::NotFound));
    assert_eq!(attempt.join_errors(", "), "missing");
}

#[rstest]
fn join_errors_with_custom_renderer() {
    let attempt: Attempt<()> = Attempt::failure([("name", "required"), ("", "bad request")]);
    let rendered = attempt.join_errors_with(|entry| entry.message().to_uppercase(), " | ");
    assert_eq!(rendered, "REQUIRED | BAD REQUEST");
}

#[rstest]
fn success_renders_no_errors() {
    let attempt: Attempt<u8> = Either::Created(1);
    assert_eq!(attempt.errors(), None);
    assert_eq!(attempt.join_errors(", "), "");
}

#[rstest]
fn result_round_trip() {
    let either: Either<String, i32> = Ok::<i32, String>(3).into();
    assert_eq!(either, Either::Right(3));

    let result: Result<i32, String> = Either::NotFound("gone".to_string()).into();
    assert_eq!(result, Err("gone".to_string()));
}
