use std::time::Duration;

/// Suspend the caller for `duration` on whichever timer the target has.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    tokio::time::sleep(duration).await;
}

/// Suspend the caller for `duration` on whichever timer the target has.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    gloo_timers::future::sleep(duration).await;
}
