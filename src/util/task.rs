//! Browser-only task spawning.

use std::future::Future;

/// Run `fut` on the browser's local executor.
///
/// During SSR or native builds the future is dropped unpolled: the backend is
/// only reachable from the browser, and the hydrated page issues its own
/// requests on mount.
pub fn spawn_in_browser<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(fut);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        drop(fut);
    }
}
