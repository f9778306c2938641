//! HTTP method name constants
//!
//! `ANY` is not a real HTTP method.
//! Registering a route under it makes the route answer every method that has
//! no entry of its own for that path.

macro_rules! method_names {
    ($($name:ident  $value:literal),* $(,)?) => {
        $(
            pub const $name: &str = $value;
        )*
    }
}

method_names! {
    GET        "GET",
    HEAD       "HEAD",
    POST       "POST",
    PUT        "PUT",
    PATCH      "PATCH",
    DELETE     "DELETE",
    OPTIONS    "OPTIONS",
    ANY        "ANY",
}
