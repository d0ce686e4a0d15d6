use sysinfo::{MemoryRefreshKind, RefreshKind, System};

const MIB: u64 = 1024 * 1024;

/// Host metadata read fresh on every request. Never cached.
#[derive(Debug)]
pub struct Snapshot {
    pub hostname: String,
    pub platform: &'static str,
    pub total_memory: u64,
    pub free_memory: u64,
}

impl Snapshot {
    pub fn capture() -> Self {
        let system = System::new_with_specifics(
            RefreshKind::nothing().with_memory(MemoryRefreshKind::everything()),
        );

        Self {
            hostname: System::host_name().unwrap_or_else(|| String::from("unknown")),
            platform: std::env::consts::OS,
            total_memory: system.total_memory(),
            free_memory: system.free_memory(),
        }
    }
}

/// Bytes to whole mebibytes, rounded to nearest.
pub fn mb(bytes: u64) -> u64 {
    (bytes + MIB / 2) / MIB
}

/// `"{n} MB"`, the rendering both the info endpoint and the dashboard use.
pub fn fmt_mb(bytes: u64) -> String {
    format!("{} MB", mb(bytes))
}
