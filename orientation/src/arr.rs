use std::fmt;

use crate::{Maybe, Stream};

/// A finite, ordered collection with eager functional operations.
///
/// An `Arr` is never changed in place: every operation consumes it and hands back a new
/// one. It is the collect-into target for both [`Maybe::to_arr`] and [`Stream::to_arr`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Arr<A> {
    xs: Vec<A>,
}

impl<A> Arr<A> {
    pub fn empty() -> Self {
        Arr { xs: Vec::new() }
    }

    pub fn of(x: A) -> Self {
        Arr { xs: vec![x] }
    }

    pub fn from_vec(xs: Vec<A>) -> Self {
        Arr { xs }
    }

    /// `n` copies of `x`.
    pub fn replicate(n: usize, x: A) -> Self
    where
        A: Clone,
    {
        Arr { xs: vec![x; n] }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn as_slice(&self) -> &[A] {
        &self.xs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.xs.iter()
    }

    pub fn fmap<B>(self, f: impl FnMut(A) -> B) -> Arr<B> {
        self.xs.into_iter().map(f).collect()
    }

    pub fn filter(self, mut p: impl FnMut(&A) -> bool) -> Arr<A> {
        self.xs.into_iter().filter(|x| p(x)).collect()
    }

    /// Concatenate the collections produced for each element, in order.
    pub fn flat_map<B>(self, f: impl FnMut(A) -> Arr<B>) -> Arr<B> {
        self.xs.into_iter().flat_map(f).collect()
    }

    /// Cartesian application: values in the outer loop, functions in the inner loop.
    ///
    /// ```rust
    /// use orientation::Arr;
    ///
    /// fn inc(x: i32) -> i32 { x + 1 }
    /// fn tenfold(x: i32) -> i32 { x * 10 }
    ///
    /// let fs = Arr::from_vec(vec![inc as fn(i32) -> i32, tenfold]);
    /// let applied = Arr::from_vec(vec![1, 2]).apply(&fs);
    ///
    /// assert_eq!(applied, Arr::from_vec(vec![2, 10, 3, 20]));
    /// ```
    pub fn apply<B, F>(self, fs: &Arr<F>) -> Arr<B>
    where
        A: Clone,
        F: Fn(A) -> B,
    {
        self.flat_map(|x| fs.iter().map(|f| f(x.clone())).collect())
    }

    pub fn find(self, mut p: impl FnMut(&A) -> bool) -> Maybe<A> {
        Maybe::from_nullable(self.xs.into_iter().find(|x| p(x)))
    }

    pub fn head(self) -> Maybe<A> {
        Maybe::from_nullable(self.xs.into_iter().next())
    }

    /// Everything but the first element; the tail of an empty collection is empty.
    pub fn tail(self) -> Arr<A> {
        self.xs.into_iter().skip(1).collect()
    }

    pub fn uncons(self) -> Maybe<(A, Arr<A>)> {
        let mut xs = self.xs.into_iter();
        Maybe::from_nullable(xs.next()).fmap(|head| (head, xs.collect()))
    }

    pub fn foldl<B>(self, plus: impl FnMut(B, A) -> B, zero: B) -> B {
        self.xs.into_iter().fold(zero, plus)
    }

    /// A finite stream that replays these elements on every run.
    pub fn to_stream(self) -> Stream<A>
    where
        A: Clone + 'static,
    {
        Stream::from_arr(self)
    }

    pub fn into_vec(self) -> Vec<A> {
        self.xs
    }
}

impl<A> Default for Arr<A> {
    fn default() -> Self {
        Arr::empty()
    }
}

impl<A> From<Vec<A>> for Arr<A> {
    fn from(xs: Vec<A>) -> Self {
        Arr::from_vec(xs)
    }
}

impl<A> FromIterator<A> for Arr<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Arr {
            xs: iter.into_iter().collect(),
        }
    }
}

impl<A> IntoIterator for Arr<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.xs.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Arr<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.xs.iter()
    }
}

impl<A: fmt::Display> fmt::Display for Arr<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Arr(")?;
        for (i, x) in self.xs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{x}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arr(xs: &[i32]) -> Arr<i32> {
        Arr::from_vec(xs.to_vec())
    }

    #[test]
    fn constructors() {
        assert!(Arr::<i32>::empty().is_empty());
        assert_eq!(Arr::of(1).as_slice(), &[1]);
        assert_eq!(Arr::replicate(3, 'x').as_slice(), &['x', 'x', 'x']);
        assert!(Arr::replicate(0, 'x').is_empty());
    }

    #[test]
    fn fmap_and_filter_keep_order() {
        assert_eq!(arr(&[1, 2, 3]).fmap(|x| x * x), arr(&[1, 4, 9]));
        assert_eq!(arr(&[5, 2, 8, 1, 6]).filter(|x| *x > 3), arr(&[5, 8, 6]));
    }

    #[test]
    fn flat_map_concatenates_in_order() {
        let expanded = arr(&[1, 2, 3]).flat_map(|x| Arr::replicate(x as usize, x));
        assert_eq!(expanded, arr(&[1, 2, 2, 3, 3, 3]));
    }

    #[test]
    fn apply_iterates_values_outer_functions_inner() {
        let fs: Arr<Box<dyn Fn(i32) -> String>> = Arr::from_vec(vec![
            Box::new(|x| format!("a{x}")),
            Box::new(|x| format!("b{x}")),
        ]);

        let applied = arr(&[1, 2]).apply(&fs);

        assert_eq!(applied.into_vec(), vec!["a1", "b1", "a2", "b2"]);
    }

    #[test]
    fn find_returns_first_match() {
        assert_eq!(arr(&[1, 4, 6, 8]).find(|x| x % 2 == 0), Maybe::just(4));
        assert_eq!(arr(&[1, 3]).find(|x| x % 2 == 0), Maybe::nothing());
    }

    #[test]
    fn decomposition() {
        assert_eq!(arr(&[7, 8, 9]).head(), Maybe::just(7));
        assert_eq!(Arr::<i32>::empty().head(), Maybe::nothing());
        assert_eq!(arr(&[7, 8, 9]).tail(), arr(&[8, 9]));
        assert_eq!(Arr::<i32>::empty().tail(), Arr::empty());
        assert_eq!(arr(&[7, 8, 9]).uncons(), Maybe::just((7, arr(&[8, 9]))));
        assert_eq!(Arr::<i32>::empty().uncons(), Maybe::nothing());
    }

    #[test]
    fn foldl_is_left_associative() {
        let digits = arr(&[1, 2, 3]).foldl(|acc, d| acc * 10 + d, 0);
        assert_eq!(digits, 123);
    }

    #[test]
    fn displays_elements_joined() {
        assert_eq!(arr(&[1, 2, 3]).to_string(), "Arr(1, 2, 3)");
        assert_eq!(Arr::<i32>::empty().to_string(), "Arr()");
    }
}
