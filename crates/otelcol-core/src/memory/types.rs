/// Memory settings handed to the collector service, all in MiB.
///
/// A plan is only constructed once `ballast_mib * 2 <= limit_mib` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryPlan {
    pub total_mib: u64,
    pub ballast_mib: u64,
    pub limit_mib: u64,
}

impl MemoryPlan {
    /// Memory left under the limit once the ballast is doubled.
    pub fn headroom_mib(&self) -> u64 {
        self.limit_mib - self.ballast_mib * 2
    }
}
