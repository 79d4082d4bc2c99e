//! Spawning backend calls from event handlers and effects.

use std::future::Future;

/// Run `request` on the browser event loop. Server rendering never issues
/// backend calls, so outside the browser the future is dropped unpolled.
pub fn spawn_request<F>(request: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(request);
    #[cfg(not(feature = "hydrate"))]
    drop(request);
}
