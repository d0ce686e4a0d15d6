use tokio::time::Instant;

/// Wall-clock anchor captured once when the process comes up.
///
/// Uptime is derived by subtraction at request time, so the value is
/// non-negative and never decreases within a single process lifetime.
#[derive(Debug, Clone, Copy)]
pub struct StartTime(Instant);

impl StartTime {
    pub fn now() -> Self {
        Self(Instant::now())
    }

    /// Whole elapsed seconds since the anchor, rounded down.
    pub fn elapsed_secs(&self) -> u64 {
        self.0.elapsed().as_secs()
    }
}

/// `"Xh Ym Zs"`, the shape the dashboard shows.
pub fn format_uptime(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{hours}h {minutes}m {seconds}s")
}
