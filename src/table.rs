//! The compiled route table
//!
//! A [`RouteTable`] is the output of a route compiler: static paths are
//! merged into one exact-match map, parameterized paths are merged into
//! combined patterns, and filters are registered by name.
//! This crate does not parse route declarations; it consumes the compiled
//! table as-is and never mutates it after a [`Dispatcher`](crate::Dispatcher)
//! takes ownership.

use crate::filter::{Filter, FilterRegistry};
use crate::handler::Handler;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Routes registered for one path, keyed by HTTP method name.
///
/// A [`method::ANY`](crate::method::ANY) key answers methods with no entry of
/// their own.
pub type MethodMap<R> = BTreeMap<String, RouteEntry<R>>;

/// The names of the filters a route runs, split by phase.
#[derive(Debug, Clone, Default)]
pub struct FilterNames {
    pub(crate) before: BTreeSet<String>,
    pub(crate) after: BTreeSet<String>,
}

impl FilterNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter to run before the handler.
    pub fn with_before(mut self, name: impl Into<String>) -> Self {
        self.before.insert(name.into());
        self
    }

    /// Adds a filter to run after the handler.
    pub fn with_after(mut self, name: impl Into<String>) -> Self {
        self.after.insert(name.into());
        self
    }
}

/// One compiled route: a handler plus the metadata dispatch needs.
pub struct RouteEntry<R> {
    pub(crate) handler: Handler<R>,
    pub(crate) filter_names: FilterNames,
    pub(crate) variable_names: Vec<String>,
}

impl<R> RouteEntry<R> {
    /// Creates an entry with no filters and no path variables.
    pub fn new(handler: Handler<R>) -> Self {
        Self {
            handler,
            filter_names: FilterNames::default(),
            variable_names: Vec::new(),
        }
    }

    /// Names the filters this route runs.
    pub fn with_filters(mut self, names: FilterNames) -> Self {
        self.filter_names = names;
        self
    }

    /// Names this route's path variables, in declaration order.
    ///
    /// The i-th name is paired with the i-th capture group of the combined
    /// pattern alternative this route was merged into, so the list must be as
    /// long as that alternative's capture group count.
    pub fn with_variables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variable_names = names.into_iter().map(Into::into).collect();
        self
    }
}

impl<R> Clone for RouteEntry<R> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
            filter_names: self.filter_names.clone(),
            variable_names: self.variable_names.clone(),
        }
    }
}

/// Several parameterized routes merged into one pattern.
///
/// Merging many routes into few patterns keeps the number of regexes tried
/// per request small and stays under the engine's capture group limit.
/// The price is that a successful match no longer says which of the merged
/// routes it belongs to; the route map recovers that from the number of
/// capture slots the match produced.
pub struct VariableRouteGroup<R> {
    pub(crate) pattern: Regex,
    /// Sparse: keyed by capture count, with gaps at counts no merged
    /// alternative can produce.
    pub(crate) route_map: BTreeMap<usize, MethodMap<R>>,
}

impl<R> VariableRouteGroup<R> {
    pub fn new(pattern: Regex) -> Self {
        Self {
            pattern,
            route_map: BTreeMap::new(),
        }
    }

    /// Registers a route under the capture count that identifies its merged
    /// alternative.
    pub fn insert(&mut self, capture_count: usize, method: impl Into<String>, entry: RouteEntry<R>) {
        self.route_map
            .entry(capture_count)
            .or_default()
            .insert(method.into(), entry);
    }
}

/// An immutable snapshot of every compiled route and filter.
pub struct RouteTable<R> {
    pub(crate) static_routes: HashMap<String, MethodMap<R>>,
    /// Tried in insertion order; the first matching group wins.
    pub(crate) variable_groups: Vec<VariableRouteGroup<R>>,
    pub(crate) filters: FilterRegistry<R>,
}

impl<R> RouteTable<R> {
    pub fn new() -> Self {
        Self {
            static_routes: HashMap::new(),
            variable_groups: Vec::new(),
            filters: FilterRegistry::new(),
        }
    }

    /// Registers a static route.
    ///
    /// Leading and trailing slashes in `path` are ignored, matching the
    /// normalization applied to request paths.
    pub fn insert_static(
        &mut self,
        path: impl AsRef<str>,
        method: impl Into<String>,
        entry: RouteEntry<R>,
    ) {
        let path = path.as_ref().trim_matches('/').to_string();
        self.static_routes
            .entry(path)
            .or_default()
            .insert(method.into(), entry);
    }

    /// Appends a variable route group.
    ///
    /// Group order is significant: dispatch tries groups in the order they
    /// were appended and stops at the first whose pattern matches.
    pub fn push_group(&mut self, group: VariableRouteGroup<R>) {
        self.variable_groups.push(group);
    }

    /// Registers a filter that routes may name in their [`FilterNames`].
    pub fn register_filter(&mut self, name: impl Into<String>, filter: Filter<R>) {
        self.filters.insert(name, filter);
    }

    /// Installs a pre-built filter registry, replacing the table's current
    /// one.
    ///
    /// A compiler that assembles its registry separately can hand it over
    /// wholesale instead of re-registering every filter through
    /// [`register_filter`](RouteTable::register_filter).
    pub fn with_filter_registry(mut self, filters: FilterRegistry<R>) -> Self {
        self.filters = filters;
        self
    }
}

impl<R> Default for RouteTable<R> {
    fn default() -> Self {
        Self::new()
    }
}
