use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::{Arr, Either, Result};

/// An optional value: either `Nothing` or `Just` a payload.
///
/// Every operation is written in terms of the eliminator [`Maybe::maybe`], which takes a
/// default for the empty case and a function for the present one.
///
/// ```rust
/// use orientation::Maybe;
///
/// let port = Maybe::from_nullable(Some("8080"))
///     .fmap_nullable(|s| s.parse::<u16>().ok())
///     .or_else(80);
///
/// assert_eq!(port, 8080);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Maybe<A> {
    #[default]
    Nothing,
    Just(A),
}

impl<A> Maybe<A> {
    pub fn nothing() -> Self {
        Maybe::Nothing
    }

    pub fn just(x: A) -> Self {
        Maybe::Just(x)
    }

    /// Lift a possibly-absent value, treating `None` as `Nothing`.
    pub fn from_nullable(x: Option<A>) -> Self {
        match x {
            Some(x) => Maybe::Just(x),
            None => Maybe::Nothing,
        }
    }

    /// Apply `f` to each element of `xs`, keeping only the present results, in order.
    pub fn map_maybes<X>(mut f: impl FnMut(X) -> Maybe<A>, xs: Arr<X>) -> Arr<A> {
        let kept = xs.foldl(
            |mut ys, x| {
                f(x).maybe((), |y| ys.push(y));
                ys
            },
            Vec::new(),
        );
        Arr::from_vec(kept)
    }

    pub fn cat_maybes(xs: Arr<Maybe<A>>) -> Arr<A> {
        Self::map_maybes(|x| x, xs)
    }

    /// The elimination primitive: `default` if empty, else `f` applied to the payload.
    #[inline]
    pub fn maybe<B>(self, default: B, f: impl FnOnce(A) -> B) -> B {
        match self {
            Maybe::Nothing => default,
            Maybe::Just(x) => f(x),
        }
    }

    pub fn as_ref(&self) -> Maybe<&A> {
        match self {
            Maybe::Nothing => Maybe::Nothing,
            Maybe::Just(x) => Maybe::Just(x),
        }
    }

    pub fn or_else(self, default: A) -> A {
        self.maybe(default, |x| x)
    }

    /// Structural field projection.
    ///
    /// `field` reads a nullable field off the payload; an absent field collapses to
    /// `Nothing`, as does an absent payload, so a chain of picks short-circuits at
    /// whatever depth the structure runs out.
    ///
    /// ```rust
    /// use orientation::Maybe;
    ///
    /// struct Inner { term: Option<&'static str> }
    /// struct Outer { inner: Option<Inner> }
    ///
    /// let full = Outer { inner: Some(Inner { term: Some("Candy") }) };
    /// let hollow = Outer { inner: None };
    ///
    /// assert_eq!(Maybe::just(full).pick(|o| o.inner).pick(|i| i.term), Maybe::just("Candy"));
    /// assert_eq!(Maybe::just(hollow).pick(|o| o.inner).pick(|i| i.term), Maybe::nothing());
    /// ```
    pub fn pick<B>(self, field: impl FnOnce(A) -> Option<B>) -> Maybe<B> {
        self.fmap_nullable(field)
    }

    pub fn fmap<B>(self, f: impl FnOnce(A) -> B) -> Maybe<B> {
        self.maybe(Maybe::nothing(), |x| Maybe::just(f(x)))
    }

    /// Like `fmap`, but the transform itself may produce absence.
    pub fn fmap_nullable<B>(self, f: impl FnOnce(A) -> Option<B>) -> Maybe<B> {
        self.maybe(Maybe::nothing(), |x| Maybe::from_nullable(f(x)))
    }

    pub fn apply<B, F>(self, f: Maybe<F>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.maybe(Maybe::nothing(), |x| f.fmap(|g| g(x)))
    }

    pub fn flat_map<B>(self, f: impl FnOnce(A) -> Maybe<B>) -> Maybe<B> {
        self.maybe(Maybe::nothing(), f)
    }

    pub fn to_either<L>(self, left: L) -> Either<L, A> {
        self.maybe(Either::left(left), Either::right)
    }

    pub fn to_arr(self) -> Arr<A> {
        self.maybe(Arr::empty(), Arr::of)
    }

    /// The diagnostic form, `Nothing()` or `Just(<compact json>)`.
    pub fn render(&self) -> Result<String>
    where
        A: Serialize,
    {
        self.as_ref()
            .maybe(Ok(String::from("Nothing()")), |x| -> Result<String> {
                Ok(format!("Just({})", serde_json::to_string(x)?))
            })
    }
}

impl Maybe<Value> {
    /// Project a field out of a json object by key; a missing key, an explicit `null`,
    /// or a payload that is not an object all give `Nothing`.
    pub fn field(self, key: &str) -> Maybe<Value> {
        self.pick(|mut value| match value.get_mut(key).map(Value::take) {
            Some(Value::Null) | None => None,
            Some(found) => Some(found),
        })
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(x: Option<A>) -> Self {
        Maybe::from_nullable(x)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(x: Maybe<A>) -> Self {
        x.maybe(None, Some)
    }
}

impl<A: Serialize> fmt::Display for Maybe<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.render().map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn eliminator_picks_the_matching_branch() {
        assert_eq!(Maybe::just(3).maybe(0, |x| x * 2), 6);
        assert_eq!(Maybe::<i32>::nothing().maybe(0, |x| x * 2), 0);
    }

    #[test]
    fn from_nullable_treats_none_as_nothing() {
        assert_eq!(Maybe::from_nullable(Some(1)), Maybe::just(1));
        assert_eq!(Maybe::<i32>::from_nullable(None), Maybe::nothing());
        assert_eq!(Option::from(Maybe::just('x')), Some('x'));
    }

    #[test]
    fn or_else_unwraps_or_defaults() {
        assert_eq!(Maybe::just("here").or_else("default"), "here");
        assert_eq!(Maybe::nothing().or_else("default"), "default");
    }

    #[test]
    fn fmap_nullable_can_drop_the_value() {
        let parsed = Maybe::just("12").fmap_nullable(|s| s.parse::<i32>().ok());
        let junk = Maybe::just("twelve").fmap_nullable(|s| s.parse::<i32>().ok());

        assert_eq!(parsed, Maybe::just(12));
        assert_eq!(junk, Maybe::nothing());
    }

    #[test]
    fn apply_needs_both_sides() {
        let inc = |x: i32| x + 1;

        assert_eq!(Maybe::just(1).apply(Maybe::just(inc)), Maybe::just(2));
        assert_eq!(Maybe::nothing().apply(Maybe::just(inc)), Maybe::nothing());
        assert_eq!(Maybe::just(1).apply(Maybe::<fn(i32) -> i32>::nothing()), Maybe::nothing());
    }

    #[test]
    fn flat_map_chains() {
        let half = |x: i32| if x % 2 == 0 { Maybe::just(x / 2) } else { Maybe::nothing() };

        assert_eq!(Maybe::just(8).flat_map(half).flat_map(half), Maybe::just(2));
        assert_eq!(Maybe::just(6).flat_map(half).flat_map(half), Maybe::nothing());
    }

    #[test]
    fn conversions() {
        assert_eq!(Maybe::just(5).to_either("none"), Either::right(5));
        assert_eq!(Maybe::<i32>::nothing().to_either("none"), Either::left("none"));
        assert_eq!(Maybe::just(5).to_arr(), Arr::of(5));
        assert_eq!(Maybe::<i32>::nothing().to_arr(), Arr::empty());
    }

    #[test]
    fn map_maybes_keeps_present_results_in_order() {
        let xs = Arr::from_vec(vec!["1", "x", "3", "", "5"]);
        let parsed = Maybe::map_maybes(|s: &str| Maybe::from_nullable(s.parse::<i32>().ok()), xs);

        assert_eq!(parsed, Arr::from_vec(vec![1, 3, 5]));
    }

    #[test]
    fn cat_maybes_drops_nothings() {
        let xs = Arr::from_vec(vec![Maybe::just(1), Maybe::nothing(), Maybe::just(3)]);

        assert_eq!(Maybe::cat_maybes(xs), Arr::from_vec(vec![1, 3]));
    }

    #[test]
    fn field_walks_json_objects() {
        let doc = json!({"a": {"b": {"term": "Candy"}, "gap": null}});

        let root = || Maybe::just(doc.clone());
        assert_eq!(root().field("a").field("b").field("term"), Maybe::just(json!("Candy")));
        assert_eq!(root().field("a").field("gap").field("term"), Maybe::nothing());
        assert_eq!(root().field("a").field("missing"), Maybe::nothing());
        assert_eq!(root().field("a").field("b").field("term").field("deeper"), Maybe::nothing());
    }

    #[test]
    fn renders_compact_json() {
        assert_eq!(Maybe::just(json!({"user": "asd"})).to_string(), r#"Just({"user":"asd"})"#);
        assert_eq!(Maybe::<i32>::nothing().to_string(), "Nothing()");
        assert_eq!(Maybe::just(vec![1, 2]).render().unwrap(), "Just([1,2])");
    }
}
