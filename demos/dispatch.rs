//! Dispatches a few requests against a small hand-compiled route table.
//!
//! Run with `RUST_LOG=debug` to see the dispatcher's resolution logging:
//!
//! ```text
//! RUST_LOG=debug cargo run --example dispatch
//! ```

use regex::Regex;
use std::ops::ControlFlow;
use switchyard::method;
use switchyard::{
    Dispatcher, Filter, FilterNames, Handler, RouteEntry, RouteTable, VariableRouteGroup,
};

fn main() {
    env_logger::init();

    let mut table = RouteTable::new();

    table.register_filter(
        "auth",
        Filter::from_fn(|_| ControlFlow::Break(String::from("401 Unauthorized"))),
    );

    table.insert_static(
        "greet",
        method::GET,
        RouteEntry::new(Handler::from_fn(|_| String::from("<h1>Hello World</h1>"))),
    );

    table.insert_static(
        "admin",
        method::GET,
        RouteEntry::new(Handler::from_fn(|_| String::from("secrets")))
            .with_filters(FilterNames::new().with_before("auth")),
    );

    let mut group = VariableRouteGroup::new(Regex::new(r"^echo/([^/]+)$").unwrap());
    group.insert(
        2,
        method::GET,
        RouteEntry::new(Handler::from_fn(|vars: Vec<String>| vars[0].clone()))
            .with_variables(["msg"]),
    );
    table.push_group(group);

    let dispatcher = Dispatcher::new(table);

    let requests = [
        ("GET", "/greet"),
        ("HEAD", "/greet"),
        ("GET", "/echo/hello"),
        ("GET", "/admin"),
        ("POST", "/greet"),
        ("GET", "/missing"),
    ];

    for (method, path) in requests {
        match dispatcher.dispatch(method, path) {
            Ok(response) => println!("{method} {path} -> {response}"),
            Err(err) => println!("{method} {path} -> {err}"),
        }
    }
}
