//! Lazy, possibly infinite sequences.
//!
//! A [`Stream`] stores no elements. It stores a *production rule*: a shared closure that,
//! every time it is called, builds a fresh [`Run`] (a cursor over the sequence from its
//! first element). Transformations wrap the upstream rule in a new rule, so building a
//! pipeline does no work at all; terminal operators such as [`Stream::find`] and
//! [`Stream::to_arr`] invoke the outermost rule once and pull from the resulting run.
//!
//! Because every terminal call starts a new run, the same `Stream` value can be consumed
//! any number of times and gives the same answer each time.
//!
//! ```rust
//! use orientation::{Arr, Stream};
//!
//! let odd_squares = Stream::nats().filter(|n| n % 2 == 1).fmap(|n| n * n);
//!
//! assert_eq!(odd_squares.take(3).to_arr(), Arr::from_vec(vec![1, 9, 25]));
//! assert_eq!(odd_squares.take(3).to_arr(), Arr::from_vec(vec![1, 9, 25]));
//! ```
//!
//! Only operators that bound the sequence (`take`, `take_while`, a `find` that matches)
//! are guaranteed to finish on an infinite source. `foldl` and `to_arr` run until the
//! source completes, which for `nats`, `iterate` and `cycle` is never.

mod cursor;

use std::fmt;
use std::rc::Rc;

use crate::{Arr, Error, Maybe, Result};
use cursor::{Elements, Filter, Fmap, Iterate, Nats, Skip, SkipWhile, Take, TakeWhile};

type Rule<A> = Rc<dyn Fn() -> Run<A>>;

/// A single pass over a stream, produced by invoking its production rule.
pub struct Run<A> {
    cursor: Box<dyn Iterator<Item = A>>,
}

impl<A> Run<A> {
    fn new(cursor: impl Iterator<Item = A> + 'static) -> Self {
        Run {
            cursor: Box::new(cursor),
        }
    }
}

impl<A> Iterator for Run<A> {
    type Item = A;

    #[inline]
    fn next(&mut self) -> Option<A> {
        self.cursor.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

/// A lazily evaluated, possibly infinite, reusable sequence.
pub struct Stream<A> {
    rule: Rule<A>,
}

impl<A> Clone for Stream<A> {
    fn clone(&self) -> Self {
        Stream {
            rule: Rc::clone(&self.rule),
        }
    }
}

impl Stream<u64> {
    /// `0, 1, 2, …`
    pub fn nats() -> Self {
        Self::from_rule(|| Nats { next: 0 })
    }
}

impl<A: 'static> Stream<A> {
    /// Build a stream from any re-invocable production rule. `rule` is called once per
    /// run and must return an iterator positioned at the first element.
    pub fn from_rule<I, R>(rule: R) -> Self
    where
        R: Fn() -> I + 'static,
        I: Iterator<Item = A> + 'static,
    {
        Stream {
            rule: Rc::new(move || Run::new(rule())),
        }
    }

    /// `seed, f(seed), f(f(seed)), …`
    pub fn iterate(f: impl Fn(A) -> A + 'static, seed: A) -> Self
    where
        A: Clone,
    {
        let f = Rc::new(f);
        Self::from_rule(move || Iterate {
            seed: Some(seed.clone()),
            last: None,
            f: Rc::clone(&f),
        })
    }

    /// Repeat `xs` forever. An empty collection has nothing to repeat and is rejected.
    pub fn cycle(xs: Arr<A>) -> Result<Self>
    where
        A: Clone,
    {
        if xs.is_empty() {
            debug!("refusing to cycle an empty collection");
            return Err(Error::EmptyCycle);
        }
        let xs: Rc<[A]> = xs.into_vec().into();
        Ok(Self::from_rule(move || Elements {
            xs: Rc::clone(&xs),
            pos: 0,
            wrap: true,
        }))
    }

    /// A finite stream over the elements of `xs`.
    pub fn from_arr(xs: Arr<A>) -> Self
    where
        A: Clone,
    {
        let xs: Rc<[A]> = xs.into_vec().into();
        Self::from_rule(move || Elements {
            xs: Rc::clone(&xs),
            pos: 0,
            wrap: false,
        })
    }

    /// Start a fresh pass over the stream.
    pub fn run(&self) -> Run<A> {
        (self.rule)()
    }

    pub fn fmap<B: 'static>(&self, f: impl Fn(A) -> B + 'static) -> Stream<B> {
        let upstream = Rc::clone(&self.rule);
        let f = Rc::new(f);
        Stream::from_rule(move || Fmap {
            upstream: upstream(),
            f: Rc::clone(&f),
        })
    }

    pub fn filter(&self, p: impl Fn(&A) -> bool + 'static) -> Stream<A> {
        let upstream = Rc::clone(&self.rule);
        let p = Rc::new(p);
        Stream::from_rule(move || Filter {
            upstream: upstream(),
            p: Rc::clone(&p),
        })
    }

    /// At most `n` leading elements.
    pub fn take(&self, n: usize) -> Stream<A> {
        let upstream = Rc::clone(&self.rule);
        Stream::from_rule(move || Take {
            upstream: upstream(),
            remaining: n,
        })
    }

    /// Leading elements while `p` holds; stops at (and discards) the first failure.
    pub fn take_while(&self, p: impl Fn(&A) -> bool + 'static) -> Stream<A> {
        let upstream = Rc::clone(&self.rule);
        let p = Rc::new(p);
        Stream::from_rule(move || TakeWhile {
            upstream: upstream(),
            p: Rc::clone(&p),
            done: false,
        })
    }

    pub fn drop(&self, n: usize) -> Stream<A> {
        let upstream = Rc::clone(&self.rule);
        Stream::from_rule(move || Skip {
            upstream: upstream(),
            pending: n,
        })
    }

    /// Skip the leading run for which `p` holds, then yield everything from the first
    /// element that fails `p` onward.
    pub fn drop_while(&self, p: impl Fn(&A) -> bool + 'static) -> Stream<A> {
        let upstream = Rc::clone(&self.rule);
        let p = Rc::new(p);
        Stream::from_rule(move || SkipWhile {
            upstream: upstream(),
            p: Rc::clone(&p),
            dropping: true,
        })
    }

    /// The first element satisfying `p`. Pulls one element at a time and stops at the
    /// first match; on an infinite stream with no match this never returns.
    pub fn find(&self, mut p: impl FnMut(&A) -> bool) -> Maybe<A> {
        let mut pulled = 0usize;
        for x in self.run() {
            pulled += 1;
            if p(&x) {
                trace!("find matched after {pulled} pulls");
                return Maybe::just(x);
            }
        }
        trace!("find exhausted the stream after {pulled} pulls");
        Maybe::nothing()
    }

    /// Left fold over every element. Terminates only if the stream does.
    pub fn foldl<B>(&self, mut plus: impl FnMut(B, A) -> B, zero: B) -> B {
        let (folded, pulled) = self
            .run()
            .fold((zero, 0usize), |(acc, n), x| (plus(acc, x), n + 1));
        trace!("foldl consumed {pulled} elements");
        folded
    }

    /// Collect every element, in order. Terminates only if the stream does.
    pub fn to_arr(&self) -> Arr<A> {
        let xs = self.foldl(
            |mut xs, x| {
                xs.push(x);
                xs
            },
            Vec::new(),
        );
        Arr::from_vec(xs)
    }
}

impl<A: Clone + 'static> From<Arr<A>> for Stream<A> {
    fn from(xs: Arr<A>) -> Self {
        Stream::from_arr(xs)
    }
}

impl<'a, A: 'static> IntoIterator for &'a Stream<A> {
    type Item = A;
    type IntoIter = Run<A>;

    fn into_iter(self) -> Run<A> {
        self.run()
    }
}

impl<A> fmt::Display for Stream<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Stream()")
    }
}

impl<A> fmt::Debug for Stream<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn range(lo: u64, hi: u64) -> Arr<u64> {
        (lo..hi).collect()
    }

    #[test]
    fn nats_take() {
        assert_eq!(Stream::nats().take(5).to_arr(), range(0, 5));
        assert_eq!(Stream::nats().take(0).to_arr(), Arr::empty());
    }

    #[test]
    fn windowing_selects_a_range() {
        let window = |k: u64, m: u64| {
            Stream::nats()
                .drop_while(move |x| *x < k)
                .take_while(move |x| *x < m)
                .to_arr()
        };

        assert_eq!(window(3, 7), range(3, 7));
        assert_eq!(window(7, 3), Arr::empty());
        assert_eq!(window(5, 5), Arr::empty());
    }

    #[test]
    fn drop_skips_a_prefix() {
        assert_eq!(Stream::nats().drop(10).take(3).to_arr(), range(10, 13));
        assert_eq!(Stream::nats().drop(0).take(2).to_arr(), range(0, 2));
    }

    #[test]
    fn streams_are_reusable() {
        let evens = Stream::nats().filter(|x| x % 2 == 0).take(4);

        assert_eq!(evens.to_arr(), evens.to_arr());
        assert_eq!(evens.foldl(|acc, x| acc + x, 0), 12);
        assert_eq!(evens.foldl(|acc, x| acc + x, 0), 12);
    }

    #[test]
    fn iterate_applies_repeatedly() {
        let powers = Stream::iterate(|x: u32| x * 2, 1).take(6).to_arr();
        assert_eq!(powers, Arr::from_vec(vec![1, 2, 4, 8, 16, 32]));
    }

    #[test]
    fn cycle_repeats_and_rejects_empty() {
        let abc = Stream::cycle(Arr::from_vec(vec!['a', 'b', 'c'])).unwrap();

        assert_eq!(abc.take(7).to_arr().into_vec(), vec!['a', 'b', 'c', 'a', 'b', 'c', 'a']);
        assert!(matches!(Stream::<char>::cycle(Arr::empty()), Err(Error::EmptyCycle)));
    }

    #[test]
    fn find_stops_at_first_match() {
        let seen = Rc::new(Cell::new(0));
        let counter = Rc::clone(&seen);
        let tapped = Stream::nats().fmap(move |x| {
            counter.set(counter.get() + 1);
            x
        });

        assert_eq!(tapped.find(|x| *x == 41), Maybe::just(41));
        assert_eq!(seen.get(), 42);
    }

    #[test]
    fn find_on_finite_stream_without_match() {
        let finite = Stream::from_arr(Arr::from_vec(vec![1, 3, 5]));
        assert_eq!(finite.find(|x| x % 2 == 0), Maybe::nothing());
    }

    #[test]
    fn building_a_pipeline_pulls_nothing() {
        let seen = Rc::new(Cell::new(0));
        let counter = Rc::clone(&seen);
        let pipeline = Stream::nats()
            .fmap(move |x| {
                counter.set(counter.get() + 1);
                x
            })
            .filter(|x| x % 3 == 0)
            .drop(2)
            .take_while(|x| *x < 100);

        assert_eq!(seen.get(), 0);
        assert_eq!(pipeline.take(2).to_arr(), Arr::from_vec(vec![6, 9]));
        assert_eq!(seen.get(), 10);
    }

    #[test]
    fn custom_rule_and_iteration() {
        let countdown = Stream::from_rule(|| (1..=3).rev());
        let collected: Vec<_> = (&countdown).into_iter().collect();

        assert_eq!(collected, vec![3, 2, 1]);
        assert_eq!(countdown.run().count(), 3);
    }

    #[test]
    fn display_is_opaque() {
        assert_eq!(Stream::nats().to_string(), "Stream()");
        assert_eq!(format!("{:?}", Stream::nats()), "Stream { .. }");
    }
}
