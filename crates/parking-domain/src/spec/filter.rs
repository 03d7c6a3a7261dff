//! Lazy filtering of a sequence by a predicate

use std::borrow::Borrow;

use super::Predicate;

/// Iterator over the items of `I` that satisfy a predicate, in their original order
#[derive(Debug)]
pub struct Filter<'p, I, P: ?Sized> {
    items: I,
    predicate: &'p P,
}

impl<I: Clone, P: ?Sized> Clone for Filter<'_, I, P> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            predicate: self.predicate,
        }
    }
}

impl<I, P> Iterator for Filter<'_, I, P>
where
    I: Iterator,
    I::Item: Borrow<P::Subject>,
    P: Predicate + ?Sized,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = self.predicate;
        self.items
            .find(|item| predicate.test(<I::Item as Borrow<P::Subject>>::borrow(item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.items.size_hint().1)
    }
}

/// Select the items satisfying `predicate`.
///
/// Nothing is evaluated until the result is iterated, and each call starts a
/// fresh traversal. Items may be owned values, shared references, or mutable
/// references, as long as they borrow as the predicate's subject.
pub fn filter<I, P>(items: I, predicate: &P) -> Filter<'_, I::IntoIter, P>
where
    I: IntoIterator,
    P: Predicate + ?Sized,
{
    Filter {
        items: items.into_iter(),
        predicate,
    }
}
