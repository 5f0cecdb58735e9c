//! Deferred loading for routed pages.
//!
//! A page that cannot render until some remote content arrives calls
//! [`use_deferred`] with its loader. The loader runs once per mount. While it is
//! outstanding the page suspends, which hands rendering of that subtree to the
//! nearest `SuspenseBoundary`; a failed load is thrown to the nearest
//! `ErrorBoundary`. Neither outcome touches the rest of the page.

use std::future::Future;

use dioxus::core::{RenderError, SuspendedFuture};
use dioxus::prelude::*;

use crate::client::model::error::ApiError;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum LoadState<T> {
    /// Loader has not resolved yet
    #[default]
    Pending,
    Loaded(T),
    /// Terminal for the mount, there is no retry
    Failed(ApiError),
}

impl<T: Clone> LoadState<T> {
    /// Snapshot of a resource's current value.
    pub fn observe(value: Option<&Result<T, ApiError>>) -> Self {
        match value {
            None => LoadState::Pending,
            Some(Ok(data)) => LoadState::Loaded(data.clone()),
            Some(Err(err)) => LoadState::Failed(err.clone()),
        }
    }
}

impl<T> LoadState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Converts the state into a render outcome.
    ///
    /// `suspend` is only called for `Pending` and must produce the suspension
    /// that parks the calling component until the loader finishes.
    pub fn into_render(self, suspend: impl FnOnce() -> RenderError) -> Result<T, RenderError> {
        match self {
            LoadState::Pending => Err(suspend()),
            LoadState::Loaded(data) => Ok(data),
            LoadState::Failed(err) => Err(err.into()),
        }
    }
}

/// Runs `loader` once for this mount and yields its value once available.
///
/// Use with `?` inside a component body so pending and failed loads propagate to the
/// enclosing boundaries:
///
/// ```rust,ignore
/// let form = use_deferred(load_register_form)?;
/// ```
pub fn use_deferred<T, F>(loader: impl FnMut() -> F + 'static) -> Result<T, RenderError>
where
    T: Clone + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    let resource = use_resource(loader);

    let state = {
        let value = resource.read();
        LoadState::observe((*value).as_ref())
    };

    state.into_render(|| RenderError::Suspended(SuspendedFuture::new(resource.task())))
}
