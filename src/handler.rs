use std::sync::Arc;

/// A handler built fresh for a single invocation.
///
/// Implement this for handlers that want per-request state, and register a
/// factory for them with [`Handler::from_factory`].
/// Plain closures implement it already.
pub trait RouteHandler<R> {
    /// Invoke the handler.
    ///
    /// `vars` holds the extracted path variables, in the order the route
    /// declared them.
    fn call(&self, vars: Vec<String>) -> R;
}

impl<R, F> RouteHandler<R> for F
where
    F: Fn(Vec<String>) -> R,
{
    fn call(&self, vars: Vec<String>) -> R {
        self(vars)
    }
}

/// The target of a route.
pub enum Handler<R> {
    /// A ready-to-call function.
    Func(Arc<dyn Fn(Vec<String>) -> R + Send + Sync>),
    /// A factory consulted once per dispatch, immediately before invocation.
    /// The instance it builds is called once and never cached.
    Factory(Arc<dyn Fn() -> Box<dyn RouteHandler<R>> + Send + Sync>),
}

impl<R> Handler<R> {
    /// Wraps a plain function as a route target.
    pub fn from_fn<F>(func: F) -> Self
    where
        F: Fn(Vec<String>) -> R + Send + Sync + 'static,
    {
        Handler::Func(Arc::new(func))
    }

    /// Wraps a factory as a route target.
    ///
    /// The factory runs on every dispatch that reaches the handler.
    pub fn from_factory<F, H>(factory: F) -> Self
    where
        F: Fn() -> H + Send + Sync + 'static,
        H: RouteHandler<R> + 'static,
    {
        Handler::Factory(Arc::new(move || Box::new(factory())))
    }

    pub(crate) fn invoke(&self, vars: Vec<String>) -> R {
        match self {
            Handler::Func(func) => func(vars),
            Handler::Factory(factory) => factory().call(vars),
        }
    }
}

impl<R> Clone for Handler<R> {
    fn clone(&self) -> Self {
        match self {
            Handler::Func(func) => Handler::Func(func.clone()),
            Handler::Factory(factory) => Handler::Factory(factory.clone()),
        }
    }
}
