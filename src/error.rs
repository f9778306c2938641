/// Why a dispatch failed.
///
/// Both variants describe the request, not the route table.
/// A table that breaks its own construction contract is a bug in the table
/// compiler and surfaces as a panic, never as one of these.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// No static or variable route matched the request path.
    ///
    /// Carries the normalized path that was looked up.
    #[error("Route '{0}' does not exist")]
    RouteNotFound(String),

    /// A route matched the path, but had no entry for the requested method
    /// and no fallback applied.
    ///
    /// Carries the methods registered for that path, in sorted order,
    /// suitable for an `Allow:` header.
    #[error("Allow: {}", .0.join(", "))]
    MethodNotAllowed(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        let not_found = DispatchError::RouteNotFound("user/42".to_string());
        assert_eq!(not_found.to_string(), "Route 'user/42' does not exist");

        let not_allowed =
            DispatchError::MethodNotAllowed(vec!["GET".to_string(), "PUT".to_string()]);
        assert_eq!(not_allowed.to_string(), "Allow: GET, PUT");
    }
}
