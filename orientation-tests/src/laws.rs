use orientation::{Arr, Either, Functor, Maybe, PartiallyApplied, Stream};
use proptest::prelude::*;

pub fn arb_arr() -> impl Strategy<Value = Arr<i32>> {
    prop::collection::vec(any::<i32>(), 0..64).prop_map(Arr::from_vec)
}

pub fn arb_maybe() -> impl Strategy<Value = Maybe<i32>> {
    prop_oneof![
        Just(Maybe::<i32>::nothing()),
        any::<i32>().prop_map(Maybe::just),
    ]
}

pub fn arb_either() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        "[a-z]{0,8}".prop_map(Either::<String, i32>::left),
        any::<i32>().prop_map(Either::<String, i32>::right),
    ]
}

fn widen(x: i32) -> i64 {
    i64::from(x)
}

fn widen_negated(x: i32) -> i64 {
    -i64::from(x)
}

/// `fmap id == id`, checked through the generic `Functor` instance.
pub fn identity_holds<F>(
    input: F::Frame<i32>,
    same: impl Fn(&F::Frame<i32>, &F::Frame<i32>) -> bool,
) -> bool
where
    F: Functor,
    F::Frame<i32>: Clone,
{
    let mapped = F::fmap_frame(input.clone(), |x| x);
    same(&mapped, &input)
}

/// `fmap (g . f) == fmap g . fmap f`, checked through the generic `Functor` instance.
pub fn composition_holds<F>(
    input: F::Frame<i32>,
    same: impl Fn(&F::Frame<i64>, &F::Frame<i64>) -> bool,
) -> bool
where
    F: Functor,
    F::Frame<i32>: Clone,
{
    let f = |x: i32| i64::from(x) * 3;
    let g = |x: i64| x - 7;
    let fused = F::fmap_frame(input.clone(), move |x| g(f(x)));
    let chained = F::fmap_frame(F::fmap_frame(input, f), g);
    same(&fused, &chained)
}

#[cfg(test)]
proptest! {
    #[test]
    fn fmap_preserves_length(xs in arb_arr()) {
        let count = |n: usize, _| n + 1;
        prop_assert_eq!(
            xs.clone().fmap(|x| x.wrapping_mul(2)).foldl(count, 0),
            xs.foldl(count, 0)
        );
    }

    #[test]
    fn filter_is_an_ordered_subsequence(xs in arb_arr(), modulus in 1i32..7) {
        let p = move |x: &i32| x.rem_euclid(modulus) == 0;
        let kept = xs.clone().filter(p);

        prop_assert!(kept.iter().all(p));
        let mut rest = xs.iter();
        for x in &kept {
            prop_assert!(rest.any(|y| y == x));
        }
    }

    #[test]
    fn maybe_either_round_trip(m in arb_maybe()) {
        prop_assert_eq!(m.to_either("left").to_maybe(), m);
    }

    #[test]
    fn nats_take_has_exactly_n(n in 0usize..512) {
        let taken = Stream::nats().take(n).to_arr();
        let expected: Arr<u64> = (0..n as u64).collect();
        prop_assert_eq!(taken, expected);
    }

    #[test]
    fn drop_while_take_while_is_a_range(k in 0u64..300, m in 0u64..300) {
        let window = Stream::nats()
            .drop_while(move |x| *x < k)
            .take_while(move |x| *x < m)
            .to_arr();
        let expected: Arr<u64> = (k..m).collect();
        prop_assert_eq!(window, expected);
    }

    #[test]
    fn streams_give_the_same_answer_twice(step in 1u64..9, n in 0usize..100) {
        let s = Stream::iterate(move |x| x + step, 0).filter(|x| x % 2 == 0).take(n);
        prop_assert_eq!(s.to_arr(), s.to_arr());
    }

    #[test]
    fn finite_stream_round_trips_arr(xs in arb_arr()) {
        prop_assert_eq!(xs.clone().to_stream().to_arr(), xs);
    }

    #[test]
    fn arr_apply_is_values_outer(xs in arb_arr()) {
        let fs = Arr::from_vec(vec![widen as fn(i32) -> i64, widen_negated]);
        let expected: Vec<i64> = xs.iter().flat_map(|x| [i64::from(*x), -i64::from(*x)]).collect();
        prop_assert_eq!(xs.apply(&fs).into_vec(), expected);
    }

    #[test]
    fn functor_laws_maybe(m in arb_maybe()) {
        prop_assert!(identity_holds::<Maybe<PartiallyApplied>>(m, |a, b| a == b));
        prop_assert!(composition_holds::<Maybe<PartiallyApplied>>(m, |a, b| a == b));
    }

    #[test]
    fn functor_laws_either(e in arb_either()) {
        prop_assert!(identity_holds::<Either<String, PartiallyApplied>>(e.clone(), |a, b| a == b));
        prop_assert!(composition_holds::<Either<String, PartiallyApplied>>(e, |a, b| a == b));
    }

    #[test]
    fn functor_laws_arr(xs in arb_arr()) {
        prop_assert!(identity_holds::<Arr<PartiallyApplied>>(xs.clone(), |a, b| a == b));
        prop_assert!(composition_holds::<Arr<PartiallyApplied>>(xs, |a, b| a == b));
    }

    #[test]
    fn functor_laws_stream(xs in arb_arr()) {
        let s = xs.to_stream();
        prop_assert!(identity_holds::<Stream<PartiallyApplied>>(s.clone(), |a, b| a.to_arr() == b.to_arr()));
        prop_assert!(composition_holds::<Stream<PartiallyApplied>>(s, |a, b| a.to_arr() == b.to_arr()));
    }
}
