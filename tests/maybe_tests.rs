//! Integration tests for Maybe<T>.

#![cfg(feature = "control")]

use outcomes::control::Maybe;
use rstest::rstest;

#[rstest]
fn just_maps_to_string() {
    assert_eq!(
        Maybe::just(5).map(|x| x.to_string()),
        Maybe::just("5".to_string())
    );
}

#[rstest]
fn nothing_maps_to_nothing() {
    assert_eq!(
        Maybe::<i32>::nothing().map(|x| x.to_string()),
        Maybe::<String>::nothing()
    );
}

#[rstest]
#[case(Maybe::just(4), true)]
#[case(Maybe::nothing(), false)]
fn queries_agree(#[case] value: Maybe<i32>, #[case] present: bool) {
    assert_eq!(value.is_just(), present);
    assert_eq!(value.has_value(), present);
    assert_eq!(value.is_nothing(), !present);
}

#[rstest]
fn default_is_nothing() {
    assert_eq!(Maybe::<String>::default(), Maybe::nothing());
}

#[rstest]
fn value_or_falls_back() {
    assert_eq!(Maybe::just(1).value_or(9), 1);
    assert_eq!(Maybe::nothing().value_or(9), 9);
}

#[rstest]
fn fold_ref_borrows() {
    let name = Maybe::just("ada".to_string());
    let length = name.fold_ref(0, String::len);
    assert_eq!(length, 3);
    assert_eq!(name, Maybe::just("ada".to_string()));
}

#[rstest]
fn flatten_nested() {
    assert_eq!(Maybe::just(Maybe::just(1)).flatten(), Maybe::just(1));
    assert_eq!(
        Maybe::just(Maybe::<i32>::nothing()).flatten(),
        Maybe::nothing()
    );
    assert_eq!(Maybe::<Maybe<i32>>::nothing().flatten(), Maybe::nothing());
}

#[rstest]
fn flat_map_combine_pairs_source_with_step() {
    let user = Maybe::just("ada");
    let profile = user.flat_map_combine(
        |name| {
            if name.is_empty() {
                Maybe::nothing()
            } else {
                Maybe::just(name.len())
            }
        },
        |name, length| format!("{name}/{length}"),
    );
    assert_eq!(profile, Maybe::just("ada/3".to_string()));
}

#[rstest]
fn option_conversions() {
    let maybe: Maybe<u8> = Some(3).into();
    assert_eq!(maybe, Maybe::just(3));
    assert_eq!(Option::<u8>::from(Maybe::<u8>::nothing()), None);
    assert_eq!(Maybe::just(3).into_option(), Some(3));
}

#[cfg(feature = "async")]
mod fold_async {
    use super::Maybe;
    use futures::FutureExt;
    use std::cell::Cell;

    #[tokio::test]
    async fn just_awaits_continuation() {
        let result = Maybe::just(21)
            .fold_async(0, |value| async move {
                tokio::task::yield_now().await;
                value * 2
            })
            .await;
        assert_eq!(result, 42);
    }

    #[tokio::test]
    async fn nothing_skips_continuation() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::nothing()
            .fold_async(-1, |value| {
                calls.set(calls.get() + 1);
                async move { value }
            })
            .await;
        assert_eq!(result, -1);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn nothing_resolves_without_suspending() {
        let ready = Maybe::<i32>::nothing()
            .fold_async(7, |value| async move { value })
            .now_or_never();
        assert_eq!(ready, Some(7));
    }
}
