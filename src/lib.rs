//! The request-dispatch core of a minimal HTTP routing library.
//! It resolves an HTTP method and URI path to a registered handler, extracts
//! path variables, and runs a before/after filter pipeline around the
//! handler.
//!
//! The [terminology](crate#terminology) section contains definitions for
//! words used throughout the documentation.
//!
//! This crate deliberately sits below the route-declaration layer.
//! A route compiler — yours, or a code generator — produces a [`RouteTable`]:
//! static paths merged into an exact-match map, parameterized paths merged
//! into combined patterns, and filters registered by name.
//! A [`Dispatcher`] takes ownership of that table and answers
//! `dispatch(method, path)` calls against it for the rest of its life.
//! There is no server in here either: the dispatcher receives two strings and
//! returns a value, and what that value means is up to you — the response
//! type is generic.
//!
//! ```
//! use regex::Regex;
//! use switchyard::method;
//! use switchyard::{Dispatcher, Handler, RouteEntry, RouteTable, VariableRouteGroup};
//!
//! let mut table = RouteTable::new();
//!
//! table.insert_static(
//!     "about",
//!     method::GET,
//!     RouteEntry::new(Handler::from_fn(|_| String::from("<h1>About</h1>"))),
//! );
//!
//! let mut group = VariableRouteGroup::new(Regex::new(r"^user/([^/]+)$").unwrap());
//! group.insert(
//!     2,
//!     method::GET,
//!     RouteEntry::new(Handler::from_fn(|vars: Vec<String>| format!("user {}", vars[0])))
//!         .with_variables(["id"]),
//! );
//! table.push_group(group);
//!
//! let dispatcher = Dispatcher::new(table);
//!
//! assert_eq!(dispatcher.dispatch("GET", "/about").unwrap(), "<h1>About</h1>");
//! assert_eq!(dispatcher.dispatch("GET", "/user/ada").unwrap(), "user ada");
//! // HEAD borrows the GET entry when it has none of its own.
//! assert_eq!(dispatcher.dispatch("HEAD", "/user/ada").unwrap(), "user ada");
//! ```
//!
//! Filters wrap the handler without knowing about it.
//! A before-filter that breaks ends the dispatch with its own response; an
//! after-filter that breaks replaces the handler's response:
//!
//! ```
//! use std::ops::ControlFlow;
//! use switchyard::method;
//! use switchyard::{Dispatcher, Filter, FilterNames, Handler, RouteEntry, RouteTable};
//!
//! let mut table = RouteTable::new();
//! table.register_filter(
//!     "auth",
//!     Filter::from_fn(|_| ControlFlow::Break(String::from("401 Unauthorized"))),
//! );
//!
//! let route = RouteEntry::new(Handler::from_fn(|_| String::from("secrets")))
//!     .with_filters(FilterNames::new().with_before("auth"));
//! table.insert_static("admin", method::GET, route);
//!
//! let dispatcher = Dispatcher::new(table);
//!
//! assert_eq!(dispatcher.dispatch("GET", "/admin").unwrap(), "401 Unauthorized");
//! ```
//!
//! # Terminology
//!
//! - Static route: a path with no variable segments, looked up by exact
//!   string match after slash trimming.
//! - Variable route: a path with parameterized segments, matched by regular
//!   expression.
//! - Combined pattern: one regular expression a compiler built by merging
//!   several variable routes, so that fewer patterns are tried per request.
//! - Capture count: the number of capture slots a successful match produced.
//!   It identifies which merged route matched; see [`VariableRouteGroup`].
//! - Fallback method: a substitute entry consulted when the requested method
//!   has none — the [`method::ANY`] wildcard, or `GET` for a `HEAD` request.

mod dispatcher;
mod error;
pub mod filter;
mod handler;
pub mod method;
mod table;

pub use dispatcher::Dispatcher;
pub use error::DispatchError;
pub use filter::{Filter, FilterHandler, FilterRegistry};
pub use handler::{Handler, RouteHandler};
pub use table::{FilterNames, MethodMap, RouteEntry, RouteTable, VariableRouteGroup};
