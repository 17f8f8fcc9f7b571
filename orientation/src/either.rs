use std::fmt;

use serde::Serialize;

use crate::{Maybe, Result};

/// A value that is one of two alternatives.
///
/// By convention `Left` carries a failure or the first alternative and `Right` carries
/// success; `fmap`, `apply` and `flat_map` work on the right side and pass a `Left`
/// through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Either<L, A> {
    Left(L),
    Right(A),
}

impl<L, A> Either<L, A> {
    pub fn left(l: L) -> Self {
        Either::Left(l)
    }

    pub fn right(x: A) -> Self {
        Either::Right(x)
    }

    /// The elimination primitive: apply whichever handler matches.
    #[inline]
    pub fn either<B>(self, on_left: impl FnOnce(L) -> B, on_right: impl FnOnce(A) -> B) -> B {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(x) => on_right(x),
        }
    }

    pub fn as_ref(&self) -> Either<&L, &A> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(x) => Either::Right(x),
        }
    }

    pub fn fmap<B>(self, f: impl FnOnce(A) -> B) -> Either<L, B> {
        self.either(Either::left, |x| Either::right(f(x)))
    }

    pub fn bimap<M, B>(self, f: impl FnOnce(L) -> M, g: impl FnOnce(A) -> B) -> Either<M, B> {
        self.either(|l| Either::left(f(l)), |x| Either::right(g(x)))
    }

    /// Apply a function held on the right. The receiver's `Left` wins over the function's.
    pub fn apply<B, F>(self, f: Either<L, F>) -> Either<L, B>
    where
        F: FnOnce(A) -> B,
    {
        self.either(Either::left, |x| f.fmap(|g| g(x)))
    }

    pub fn flat_map<B>(self, f: impl FnOnce(A) -> Either<L, B>) -> Either<L, B> {
        self.either(Either::left, f)
    }

    pub fn to_maybe(self) -> Maybe<A> {
        self.either(|_| Maybe::nothing(), Maybe::just)
    }

    /// The diagnostic form, `Left(<compact json>)` or `Right(<compact json>)`.
    pub fn render(&self) -> Result<String>
    where
        L: Serialize,
        A: Serialize,
    {
        let rendered = self.as_ref().either(
            |l| serde_json::to_string(l).map(|s| format!("Left({s})")),
            |r| serde_json::to_string(r).map(|s| format!("Right({s})")),
        )?;
        Ok(rendered)
    }
}

impl<L, A> From<std::result::Result<A, L>> for Either<L, A> {
    fn from(result: std::result::Result<A, L>) -> Self {
        match result {
            Ok(x) => Either::Right(x),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, A> From<Either<L, A>> for std::result::Result<A, L> {
    fn from(either: Either<L, A>) -> Self {
        either.either(Err, Ok)
    }
}

impl<L: Serialize, A: Serialize> fmt::Display for Either<L, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.render().map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Parsed = Either<String, i32>;

    fn parse(s: &str) -> Parsed {
        s.parse::<i32>().map_err(|e| e.to_string()).into()
    }

    #[test]
    fn eliminator_picks_the_matching_handler() {
        assert_eq!(Parsed::left("bad".into()).either(|l| l.len() as i32, |x| x), 3);
        assert_eq!(Parsed::right(7).either(|l| l.len() as i32, |x| x), 7);
    }

    #[test]
    fn fmap_only_touches_right() {
        assert_eq!(parse("2").fmap(|x| x * 10), Either::right(20));
        assert!(matches!(parse("two").fmap(|x| x * 10), Either::Left(_)));
    }

    #[test]
    fn bimap_maps_whichever_side_is_present() {
        let l: Either<i32, i32> = Either::left(1);
        let r: Either<i32, i32> = Either::right(1);

        assert_eq!(l.bimap(|x| x - 1, |x| x + 1), Either::left(0));
        assert_eq!(r.bimap(|x| x - 1, |x| x + 1), Either::right(2));
    }

    #[test]
    fn apply_short_circuits_on_left() {
        let inc: Either<&str, fn(i32) -> i32> = Either::right(|x| x + 1);
        let broken: Either<&str, fn(i32) -> i32> = Either::left("no function");

        assert_eq!(Either::right(1).apply(inc), Either::right(2));
        assert_eq!(Either::left("no value").apply(inc), Either::left("no value"));
        assert_eq!(Either::right(1).apply(broken), Either::left("no function"));
        assert_eq!(Either::left("no value").apply(broken), Either::left("no value"));
    }

    #[test]
    fn flat_map_chains_on_right() {
        let positive = |x: i32| if x > 0 { Either::right(x) } else { Either::left(format!("{x} <= 0")) };

        assert_eq!(parse("4").flat_map(positive), Either::right(4));
        assert_eq!(parse("-4").flat_map(positive), Either::left("-4 <= 0".to_string()));
    }

    #[test]
    fn to_maybe_collapses_left() {
        assert_eq!(parse("9").to_maybe(), Maybe::just(9));
        assert_eq!(parse("nine").to_maybe(), Maybe::nothing());
    }

    #[test]
    fn result_round_trip() {
        let ok: std::result::Result<i32, String> = parse("5").into();
        assert_eq!(ok, Ok(5));
    }

    #[test]
    fn renders_compact_json() {
        assert_eq!(Either::<&str, i32>::left("boom").to_string(), r#"Left("boom")"#);
        assert_eq!(Either::<&str, Vec<i32>>::right(vec![1, 2]).to_string(), "Right([1,2])");
    }
}
