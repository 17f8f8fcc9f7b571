//! The per-run state machines behind each stream stage.
//!
//! Each cursor holds only the state of a single run (a position, a countdown, a flag)
//! plus a shared handle to its stage's function. A fresh cursor is built every time a
//! production rule is invoked, which is what makes a `Stream` reusable.

use std::rc::Rc;

pub(crate) struct Iterate<A, F> {
    pub(crate) seed: Option<A>,
    pub(crate) last: Option<A>,
    pub(crate) f: Rc<F>,
}

impl<A: Clone, F: Fn(A) -> A> Iterator for Iterate<A, F> {
    type Item = A;

    fn next(&mut self) -> Option<A> {
        let next = match self.last.take() {
            Some(prev) => (self.f)(prev),
            None => self.seed.take()?,
        };
        self.last = Some(next.clone());
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Replays a shared slice, wrapping around forever when `wrap` is set.
pub(crate) struct Elements<A> {
    pub(crate) xs: Rc<[A]>,
    pub(crate) pos: usize,
    pub(crate) wrap: bool,
}

impl<A: Clone> Iterator for Elements<A> {
    type Item = A;

    fn next(&mut self) -> Option<A> {
        if self.wrap && self.pos == self.xs.len() {
            self.pos = 0;
        }
        let x = self.xs.get(self.pos)?.clone();
        self.pos += 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.wrap {
            (usize::MAX, None)
        } else {
            let remaining = self.xs.len() - self.pos;
            (remaining, Some(remaining))
        }
    }
}

pub(crate) struct Nats {
    pub(crate) next: u64,
}

impl Iterator for Nats {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let x = self.next;
        self.next += 1;
        Some(x)
    }
}

pub(crate) struct Fmap<I, F> {
    pub(crate) upstream: I,
    pub(crate) f: Rc<F>,
}

impl<I, F, B> Iterator for Fmap<I, F>
where
    I: Iterator,
    F: Fn(I::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        self.upstream.next().map(|x| (self.f)(x))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

pub(crate) struct Filter<I, P> {
    pub(crate) upstream: I,
    pub(crate) p: Rc<P>,
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let x = self.upstream.next()?;
            if (self.p)(&x) {
                return Some(x);
            }
        }
    }
}

pub(crate) struct Take<I> {
    pub(crate) upstream: I,
    pub(crate) remaining: usize,
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        // never pull upstream once the budget is spent
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.upstream.next()
    }
}

pub(crate) struct TakeWhile<I, P> {
    pub(crate) upstream: I,
    pub(crate) p: Rc<P>,
    pub(crate) done: bool,
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        match self.upstream.next() {
            Some(x) if (self.p)(&x) => Some(x),
            _ => {
                self.done = true;
                None
            }
        }
    }
}

pub(crate) struct Skip<I> {
    pub(crate) upstream: I,
    pub(crate) pending: usize,
}

impl<I: Iterator> Iterator for Skip<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while self.pending > 0 {
            self.pending -= 1;
            self.upstream.next()?;
        }
        self.upstream.next()
    }
}

pub(crate) struct SkipWhile<I, P> {
    pub(crate) upstream: I,
    pub(crate) p: Rc<P>,
    pub(crate) dropping: bool,
}

impl<I, P> Iterator for SkipWhile<I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.dropping {
            self.dropping = false;
            // the first element that fails `p` is yielded, not skipped
            loop {
                let x = self.upstream.next()?;
                if !(self.p)(&x) {
                    return Some(x);
                }
            }
        }
        self.upstream.next()
    }
}
