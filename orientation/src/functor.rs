use crate::{Arr, Either, Maybe, Stream};

/// A container whose elements can be mapped over via `fmap_frame`.
///
/// # Motivation
///
/// Each container in this crate has its own inherent `fmap`. This trait exists so that
/// code can be written once over *any* of them, eg. the functor law tests, which check
/// identity and composition for every container with a single generic function.
///
/// # Implementing this trait
///
/// Rust does not allow implementing a trait for a partially applied type. That is, we can
/// implement a trait for `Maybe<usize>` but not for just `Maybe`. For this reason the
/// trait is implemented on the container applied to the uninhabited [`PartiallyApplied`]
/// marker, eg. `Maybe<PartiallyApplied>`, and the real container is named via `Frame<X>`.
///
/// # Use
///
/// ```rust
/// use orientation::{Functor, Maybe, PartiallyApplied};
///
/// let mapped = Maybe::<PartiallyApplied>::fmap_frame(Maybe::just(1), |n| n + 10);
///
/// assert_eq!(mapped, Maybe::just(11));
/// ```
pub trait Functor {
    /// the container type that is mapped over by `fmap_frame`
    type Frame<X>;

    /// Apply some function `f` to each element inside a container.
    ///
    /// The bounds are those of the most demanding instance, [`Stream`], which stores `f`
    /// in its production rule and so needs it to outlive the call.
    fn fmap_frame<A: 'static, B: 'static>(
        input: Self::Frame<A>,
        f: impl Fn(A) -> B + 'static,
    ) -> Self::Frame<B>;
}

/// An uninhabited type used to define [`Functor`] instances for partially-applied types.
///
/// For example: the `Functor` instance for `Arr<A>` cannot be written over the
/// partially-applied type `Arr`, so instead we write it over `Arr<PartiallyApplied>`
#[derive(Clone, Debug)]
pub enum PartiallyApplied {}

impl Functor for Maybe<PartiallyApplied> {
    type Frame<X> = Maybe<X>;

    #[inline(always)]
    fn fmap_frame<A: 'static, B: 'static>(
        input: Self::Frame<A>,
        f: impl Fn(A) -> B + 'static,
    ) -> Self::Frame<B> {
        input.fmap(f)
    }
}

impl<L> Functor for Either<L, PartiallyApplied> {
    type Frame<X> = Either<L, X>;

    #[inline(always)]
    fn fmap_frame<A: 'static, B: 'static>(
        input: Self::Frame<A>,
        f: impl Fn(A) -> B + 'static,
    ) -> Self::Frame<B> {
        input.fmap(f)
    }
}

impl Functor for Arr<PartiallyApplied> {
    type Frame<X> = Arr<X>;

    #[inline(always)]
    fn fmap_frame<A: 'static, B: 'static>(
        input: Self::Frame<A>,
        f: impl Fn(A) -> B + 'static,
    ) -> Self::Frame<B> {
        input.fmap(f)
    }
}

impl Functor for Stream<PartiallyApplied> {
    type Frame<X> = Stream<X>;

    #[inline(always)]
    fn fmap_frame<A: 'static, B: 'static>(
        input: Self::Frame<A>,
        f: impl Fn(A) -> B + 'static,
    ) -> Self::Frame<B> {
        input.fmap(f)
    }
}
