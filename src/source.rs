//! Capability-typed sources: single-pass streams versus sequences that
//! can be re-iterated from the start.
//!
//! The distinction matters for step-seek: restoring the pre-seek
//! position requires a fresh pass over the sequence, which a one-shot
//! stream cannot provide. Tagging the capability at construction keeps
//! seek failures explicit instead of silently producing nothing.

use std::fmt;

type BoxedIter<T> = Box<dyn Iterator<Item = T>>;

enum Inner<T> {
    SinglePass(BoxedIter<T>),
    Reiterable {
        factory: Box<dyn Fn() -> BoxedIter<T>>,
        current: BoxedIter<T>,
    },
}

/// A sequence a flow draws items from, tagged by whether fresh passes
/// can be produced on demand.
pub struct Source<T> {
    inner: Inner<T>,
}

impl<T> Source<T> {
    /// Wraps a one-shot iterator. Step-seek is unavailable over it, and
    /// its length stays unknown unless supplied at flow construction.
    pub fn single_pass<I>(iter: I) -> Self
    where
        I: Iterator<Item = T> + 'static,
    {
        Self {
            inner: Inner::SinglePass(Box::new(iter)),
        }
    }

    /// Wraps a collection that can be re-iterated from the start, which
    /// enables step-seek and seek restore.
    pub fn reiterable<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T> + Clone + 'static,
    {
        Self::from_factory(move || Box::new(collection.clone().into_iter()))
    }

    /// Builds a reiterable source from an explicit fresh-pass factory.
    /// Every call of `factory` must yield the same sequence.
    pub fn from_factory<F>(factory: F) -> Self
    where
        F: Fn() -> BoxedIter<T> + 'static,
    {
        let current = factory();
        Self {
            inner: Inner::Reiterable {
                factory: Box::new(factory),
                current,
            },
        }
    }

    /// Whether fresh passes can be produced on demand.
    pub fn is_reiterable(&self) -> bool {
        matches!(self.inner, Inner::Reiterable { .. })
    }

    /// Counts a fresh pass without disturbing the current one. `None`
    /// for single-pass sources.
    pub(crate) fn count_fresh(&self) -> Option<usize> {
        match &self.inner {
            Inner::SinglePass(_) => None,
            Inner::Reiterable { factory, .. } => Some(factory().count()),
        }
    }

    pub(crate) fn next(&mut self) -> Option<T> {
        match &mut self.inner {
            Inner::SinglePass(iter) => iter.next(),
            Inner::Reiterable { current, .. } => current.next(),
        }
    }

    /// Replaces the current pass with a fresh one. No-op for single-pass
    /// sources, which have nothing to rebuild from.
    pub(crate) fn restart(&mut self) {
        if let Inner::Reiterable { factory, current } = &mut self.inner {
            *current = factory();
        }
    }
}

impl<T> fmt::Debug for Source<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner {
            Inner::SinglePass(_) => f.write_str("Source::SinglePass"),
            Inner::Reiterable { .. } => f.write_str("Source::Reiterable"),
        }
    }
}
