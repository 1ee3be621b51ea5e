//! A middleware-style gate that turns away requests no route accepts.

use arc_swap::ArcSwap;
use std::{borrow::Cow, sync::Arc};

use crate::{MatchRequest, RouteNotFound, RouteTable, TemplateSyntaxError};

/// Somewhere raw route templates come from, such as a route table
/// assembled by a framework at startup.
pub trait RouteSource: Send + Sync {
    /// The raw templates, in registration order
    fn routes(&self) -> Vec<Cow<'_, str>>;
}

impl<S: AsRef<str> + Send + Sync> RouteSource for Vec<S> {
    fn routes(&self) -> Vec<Cow<'_, str>> {
        self.as_slice().routes()
    }
}

impl<S: AsRef<str> + Send + Sync> RouteSource for [S] {
    fn routes(&self) -> Vec<Cow<'_, str>> {
        self.iter().map(|s| Cow::Borrowed(s.as_ref())).collect()
    }
}

impl<S: AsRef<str> + Send + Sync, const N: usize> RouteSource for [S; N] {
    fn routes(&self) -> Vec<Cow<'_, str>> {
        self.as_slice().routes()
    }
}

impl<T: RouteSource + ?Sized> RouteSource for &T {
    fn routes(&self) -> Vec<Cow<'_, str>> {
        (**self).routes()
    }
}

impl<T: RouteSource + ?Sized> RouteSource for Arc<T> {
    fn routes(&self) -> Vec<Cow<'_, str>> {
        (**self).routes()
    }
}

/// Answers "does any registered route accept this request?"
///
/// The source is parsed when the gate is built, so a bad template fails
/// at load time. [`RouteNotFoundGate::reload`] re-reads the source and
/// publishes a complete new [`RouteTable`] in one atomic swap; requests
/// being checked concurrently see either the old table or the new one,
/// never a mix.
#[derive(Debug)]
pub struct RouteNotFoundGate<S> {
    source: S,
    table: ArcSwap<RouteTable>,
}

impl<S: RouteSource> RouteNotFoundGate<S> {
    pub fn new(source: S) -> Result<Self, TemplateSyntaxError> {
        let table = RouteTable::parse(source.routes())?;

        #[cfg(feature = "log")]
        log::info!("loaded {} routes", table.len());

        Ok(Self {
            source,
            table: ArcSwap::from_pointee(table),
        })
    }

    /// Re-reads and re-parses the source. If any template fails to parse
    /// the current table stays in service and the error is returned.
    pub fn reload(&self) -> Result<(), TemplateSyntaxError> {
        let table = match RouteTable::parse(self.source.routes()) {
            Ok(table) => table,
            Err(error) => {
                #[cfg(feature = "log")]
                log::warn!("keeping previous routes, reload rejected: {error}");
                return Err(error);
            }
        };

        #[cfg(feature = "log")]
        log::info!("reloaded {} routes", table.len());

        self.table.store(Arc::new(table));
        Ok(())
    }

    /// the route source this gate reads from
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The table currently in service. It does not change after being
    /// returned, even if the gate is reloaded.
    pub fn snapshot(&self) -> Arc<RouteTable> {
        self.table.load_full()
    }

    pub fn check(&self, request: &MatchRequest<'_>) -> Result<(), RouteNotFound> {
        self.table.load().find_match(request).map(|_| ())
    }

    /// Continuation-style entry point: `next` receives `None` when some
    /// route accepts the request and `Some(RouteNotFound)` otherwise.
    pub fn invoke<F, O>(&self, request: &MatchRequest<'_>, next: F) -> O
    where
        F: FnOnce(Option<RouteNotFound>) -> O,
    {
        next(self.check(request).err())
    }
}
