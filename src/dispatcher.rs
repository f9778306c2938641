use crate::error::DispatchError;
use crate::method;
use crate::table::{MethodMap, RouteEntry, RouteTable};
use regex::Captures;
use std::ops::ControlFlow;

/// Resolves requests against a compiled [`RouteTable`] and runs the matched
/// route's filters and handler.
///
/// A dispatcher owns its table and never mutates it, so it can be shared
/// across worker threads behind an `Arc` with no further synchronization.
pub struct Dispatcher<R> {
    table: RouteTable<R>,
}

impl<R> Dispatcher<R> {
    pub fn new(table: RouteTable<R>) -> Self {
        Self { table }
    }

    /// Dispatches a route for the given HTTP method and URI path.
    ///
    /// The path is normalized by trimming leading and trailing slashes, then
    /// resolved against the static map first and the variable route groups
    /// second.
    /// The matched route's before-filters, handler, and after-filters run in
    /// that order; see the [`filter`](crate::filter) module for how a filter
    /// can cut the sequence short.
    ///
    /// # Panics
    ///
    /// Panics if the route table violates its construction contract by
    /// leaving a variable route group without a route at or above an
    /// observable capture count.
    pub fn dispatch(&self, http_method: &str, uri: &str) -> Result<R, DispatchError> {
        let path = uri.trim_matches('/');
        let (route, vars) = self.resolve_route(http_method, path)?;

        let filters = &self.table.filters;

        for filter in filters.select(&route.filter_names.before) {
            if let ControlFlow::Break(response) = filter.run(None) {
                log::debug!(method = http_method, path = path; "before-filter ended the dispatch");
                return Ok(response);
            }
        }

        let mut response = route.handler.invoke(vars);

        for filter in filters.select(&route.filter_names.after) {
            if let ControlFlow::Break(replacement) = filter.run(Some(&response)) {
                response = replacement;
                break;
            }
        }

        Ok(response)
    }

    /// Static routes first, then the variable route groups.
    fn resolve_route(
        &self,
        http_method: &str,
        path: &str,
    ) -> Result<(&RouteEntry<R>, Vec<String>), DispatchError> {
        if let Some(routes) = self.table.static_routes.get(path) {
            let route = select_method(routes, http_method)?;
            return Ok((route, Vec::new()));
        }

        self.resolve_variable_route(http_method, path)
    }

    fn resolve_variable_route(
        &self,
        http_method: &str,
        path: &str,
    ) -> Result<(&RouteEntry<R>, Vec<String>), DispatchError> {
        for (index, group) in self.table.variable_groups.iter().enumerate() {
            let Some(captures) = group.pattern.captures(path) else {
                continue;
            };

            // The compiler leaves gaps at capture counts no merged
            // alternative can produce, so the first populated key at or
            // above the observed count identifies the originating route.
            let count = capture_count(&captures);
            let Some((_, routes)) = group.route_map.range(count..).next() else {
                panic!(
                    "malformed route table: group {index} has no route at or above capture count {count}"
                );
            };

            let route = select_method(routes, http_method)?;
            let vars = extract_variables(route, &captures);

            log::debug!(method = http_method, path = path, group = index; "matched variable route");
            return Ok((route, vars));
        }

        Err(DispatchError::RouteNotFound(path.to_string()))
    }
}

/// Number of capture slots that participated in the match: the whole-match
/// slot plus every group up to the last one that matched, empty matches
/// included.
fn capture_count(captures: &Captures) -> usize {
    (0..captures.len())
        .rev()
        .find(|&i| captures.get(i).is_some())
        .map_or(0, |i| i + 1)
}

fn select_method<'t, R>(
    routes: &'t MethodMap<R>,
    http_method: &str,
) -> Result<&'t RouteEntry<R>, DispatchError> {
    if let Some(route) = routes.get(http_method) {
        return Ok(route);
    }

    check_fallbacks(routes, http_method)
}

/// Fallbacks, in priority order: the `ANY` wildcard, then the `GET` entry
/// for a `HEAD` request.
fn check_fallbacks<'t, R>(
    routes: &'t MethodMap<R>,
    http_method: &str,
) -> Result<&'t RouteEntry<R>, DispatchError> {
    if let Some(route) = routes.get(method::ANY) {
        return Ok(route);
    }

    if http_method == method::HEAD {
        if let Some(route) = routes.get(method::GET) {
            return Ok(route);
        }
    }

    let allowed = routes.keys().cloned().collect();
    Err(DispatchError::MethodNotAllowed(allowed))
}

/// Pairs the route's i-th variable name with capture group i + 1.
///
/// A group that did not participate or captured the empty string contributes
/// no variable, so an optional trailing segment is simply absent from the
/// handler's arguments.
fn extract_variables<R>(route: &RouteEntry<R>, captures: &Captures) -> Vec<String> {
    let mut vars = Vec::with_capacity(route.variable_names.len());

    for slot in 1..=route.variable_names.len() {
        match captures.get(slot) {
            Some(value) if !value.as_str().is_empty() => vars.push(value.as_str().to_string()),
            _ => continue,
        }
    }

    vars
}
