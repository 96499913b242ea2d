//! Platform sleep used by component timers.
//!
//! Futures built on these are spawned as Dioxus tasks, so they are dropped
//! (and the timer cancelled) when the owning component unmounts.

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Browsers cap a single timeout at `i32::MAX` milliseconds, so longer
/// waits are chained.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    const MAX_TIMEOUT: Duration = Duration::from_millis(i32::MAX as u64);
    let mut left = duration;
    while !left.is_zero() {
        let step = left.min(MAX_TIMEOUT);
        gloo_timers::future::sleep(step).await;
        left -= step;
    }
}
