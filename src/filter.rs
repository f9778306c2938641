//! Named filters that run around a route's handler
//!
//! A filter's verdict is a [`std::ops::ControlFlow`]: `Continue(())` lets the
//! dispatch proceed, `Break(response)` ends it with that response.
//! Before the handler runs, breaking skips the handler and the after-chain
//! entirely.
//! After the handler runs, breaking replaces the handler's response and skips
//! the after-filters that remain.
//!
//! Filters live in a [`FilterRegistry`] shared by the whole route table, and
//! routes refer to them by name.
//! A route's filters execute in the order they were registered, not in the
//! order the route names them.

use std::collections::BTreeSet;
use std::ops::ControlFlow;
use std::sync::Arc;

/// A filter built fresh for a single invocation.
///
/// Plain closures implement it already; implement it by hand and register a
/// factory with [`Filter::from_factory`] when a filter wants per-request
/// state.
pub trait FilterHandler<R> {
    /// Run the filter.
    ///
    /// `response` is `None` when the filter runs before the handler, and the
    /// current response when it runs after.
    fn run(&self, response: Option<&R>) -> ControlFlow<R>;
}

impl<R, F> FilterHandler<R> for F
where
    F: Fn(Option<&R>) -> ControlFlow<R>,
{
    fn run(&self, response: Option<&R>) -> ControlFlow<R> {
        self(response)
    }
}

/// A registered filter.
pub enum Filter<R> {
    /// A ready-to-call function.
    Func(Arc<dyn Fn(Option<&R>) -> ControlFlow<R> + Send + Sync>),
    /// A factory consulted once per invocation.
    /// The instance it builds runs once and is never cached.
    Factory(Arc<dyn Fn() -> Box<dyn FilterHandler<R>> + Send + Sync>),
}

impl<R> Filter<R> {
    /// Wraps a plain function as a filter.
    pub fn from_fn<F>(func: F) -> Self
    where
        F: Fn(Option<&R>) -> ControlFlow<R> + Send + Sync + 'static,
    {
        Filter::Func(Arc::new(func))
    }

    /// Wraps a factory as a filter.
    pub fn from_factory<F, H>(factory: F) -> Self
    where
        F: Fn() -> H + Send + Sync + 'static,
        H: FilterHandler<R> + 'static,
    {
        Filter::Factory(Arc::new(move || Box::new(factory())))
    }

    pub(crate) fn run(&self, response: Option<&R>) -> ControlFlow<R> {
        match self {
            Filter::Func(func) => func(response),
            Filter::Factory(factory) => factory().run(response),
        }
    }
}

impl<R> Clone for Filter<R> {
    fn clone(&self) -> Self {
        match self {
            Filter::Func(func) => Filter::Func(func.clone()),
            Filter::Factory(factory) => Filter::Factory(factory.clone()),
        }
    }
}

/// The filters of a route table, keyed by name, in registration order.
pub struct FilterRegistry<R> {
    entries: Vec<(String, Filter<R>)>,
}

impl<R> FilterRegistry<R> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers `filter` under `name`.
    ///
    /// Re-registering a name replaces the filter but keeps the name's
    /// original position in the execution order.
    pub fn insert(&mut self, name: impl Into<String>, filter: Filter<R>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = filter,
            None => self.entries.push((name, filter)),
        }
    }

    /// The registered filters whose name appears in `names`, in registration
    /// order.
    /// Names with no registered filter are skipped.
    pub(crate) fn select<'a>(
        &'a self,
        names: &'a BTreeSet<String>,
    ) -> impl Iterator<Item = &'a Filter<R>> + 'a {
        self.entries
            .iter()
            .filter(|(name, _)| names.contains(name))
            .map(|(_, filter)| filter)
    }
}

impl<R> Default for FilterRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}
