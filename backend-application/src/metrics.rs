use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    sync_requests: AtomicU64,
    entries_created: AtomicU64,
    merges: AtomicU64,
    conflicts: AtomicU64,
}

impl Metrics {
    pub fn record_sync(&self) {
        self.sync_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_entries_created(&self, count: usize) {
        self.entries_created.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_merge(&self) {
        self.merges.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_conflict(&self) {
        self.conflicts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let syncs = self.sync_requests.load(Ordering::Relaxed);
        let created = self.entries_created.load(Ordering::Relaxed);
        let merges = self.merges.load(Ordering::Relaxed);
        let conflicts = self.conflicts.load(Ordering::Relaxed);

        format!(
            "# TYPE qafala_sync_requests_total counter\n\
qafala_sync_requests_total {}\n\
# TYPE qafala_entries_created_total counter\n\
qafala_entries_created_total {}\n\
# TYPE qafala_merges_total counter\n\
qafala_merges_total {}\n\
# TYPE qafala_conflicts_total counter\n\
qafala_conflicts_total {}\n",
            syncs, created, merges, conflicts
        )
    }
}
