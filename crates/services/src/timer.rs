use std::time::Duration;

/// Runs the per-question countdown: one suspension point per elapsed second,
/// calling `on_tick` with the seconds left after each.
///
/// The task has no side effects of its own: the caller turns ticks into
/// engine events and treats normal completion as timer expiry. Cancellation
/// is dropping the task at a suspension point (screen teardown), which must
/// happen before any navigation side effect so a stale countdown can never
/// fire after the screen was left.
pub async fn run_countdown(seconds: u32, mut on_tick: impl FnMut(u32)) {
    for remaining in (0..seconds).rev() {
        tokio::time::sleep(Duration::from_secs(1)).await;
        on_tick(remaining);
    }
}
