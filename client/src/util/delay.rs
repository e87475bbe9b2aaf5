//! Simulated network latency.
//!
//! In the browser this is a real timer; during server rendering and native
//! tests the future completes immediately so nothing blocks a thread.

use std::time::Duration;

/// Wait for `duration` before resolving. Zero durations resolve immediately.
pub async fn sleep(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration;
    }
}
