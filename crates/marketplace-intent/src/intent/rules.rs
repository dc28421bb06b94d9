//! Ordered rule tables: rules are checked in declaration order and the first
//! rule whose predicate holds decides the result.

/// Condition evaluated against a classification context.
pub trait Predicate<C: ?Sized> {
    fn matches(&self, context: &C) -> bool;
}

impl<C: ?Sized> Predicate<C> for fn(&C) -> bool {
    fn matches(&self, context: &C) -> bool {
        self(context)
    }
}

/// Case-sensitive substring containment of a single marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contains(pub &'static str);

impl Predicate<str> for Contains {
    fn matches(&self, context: &str) -> bool {
        context.contains(self.0)
    }
}

/// Holds when the context contains any of the listed markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnyOf(pub &'static [&'static str]);

impl Predicate<str> for AnyOf {
    fn matches(&self, context: &str) -> bool {
        self.0.iter().any(|marker| context.contains(marker))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule<P, T> {
    pub predicate: P,
    pub result: T,
}

/// Returns the first rule whose predicate matches `context`.
pub fn first_match<'t, C, P, T>(rules: &'t [Rule<P, T>], context: &C) -> Option<&'t Rule<P, T>>
where
    C: ?Sized,
    P: Predicate<C>,
{
    rules.iter().find(|rule| rule.predicate.matches(context))
}
