//! Fire-and-forget async work from event handlers and effects.

use std::future::Future;

/// Run `fut` on the browser task queue. SSR never executes client handlers,
/// so outside `hydrate` the future is dropped unpolled.
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}
