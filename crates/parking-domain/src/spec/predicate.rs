//! Predicate trait and logical conjunction
//!
//! A predicate is bound to exactly one subject type through `Predicate::Subject`,
//! so a spot predicate can never be applied to a vehicle, and `and` only
//! combines predicates over the same subject.

/// A reusable boolean test over one kind of entity.
///
/// Implementations must be pure: testing the same unchanged subject twice
/// yields the same answer.
pub trait Predicate {
    type Subject: ?Sized;

    fn test(&self, subject: &Self::Subject) -> bool;

    /// Conjunction with another predicate over the same subject
    fn and<P>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
        P: Predicate<Subject = Self::Subject>,
    {
        And::new(self, other)
    }
}

impl<P: Predicate + ?Sized> Predicate for &P {
    type Subject = P::Subject;

    fn test(&self, subject: &Self::Subject) -> bool {
        (**self).test(subject)
    }
}

impl<P: Predicate + ?Sized> Predicate for Box<P> {
    type Subject = P::Subject;

    fn test(&self, subject: &Self::Subject) -> bool {
        (**self).test(subject)
    }
}

/// Both predicates hold. `second` is not evaluated when `first` fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<A, B> {
    first: A,
    second: B,
}

impl<A, B> And<A, B>
where
    A: Predicate,
    B: Predicate<Subject = A::Subject>,
{
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Predicate for And<A, B>
where
    A: Predicate,
    B: Predicate<Subject = A::Subject>,
{
    type Subject = A::Subject;

    fn test(&self, subject: &Self::Subject) -> bool {
        self.first.test(subject) && self.second.test(subject)
    }
}

pub fn and<A, B>(first: A, second: B) -> And<A, B>
where
    A: Predicate,
    B: Predicate<Subject = A::Subject>,
{
    And::new(first, second)
}
