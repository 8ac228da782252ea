//! The report store: an explicit state container over the report
//! collection.
//!
//! Mutation discipline, in order: apply to the in-memory collection, save
//! the whole collection to the local cache, notify subscribers, then
//! attempt the equivalent remote call. The remote mirror never blocks or
//! rolls back a local mutation; its failures are logged at `warn` and
//! swallowed. The one post-hoc adjustment is creation: a successful remote
//! create replaces the provisional record with the server's representation,
//! which may carry a server-assigned id.

use tokio::sync::broadcast;

use nearmiss_core::{codec, filter, CoreError, FilterCriteria, Report, ReportDraft};
use nearmiss_store::LocalCache;

use crate::mirror::RemoteMirror;

/// Buffer capacity for the change-notification channel.
const EVENT_CAPACITY: usize = 64;

/// Change notification emitted after every local mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Submitted { id: String },
    Deleted { id: String },
    FollowUpToggled { id: String },
    Reset,
    Imported { count: usize },
}

/// Local-first report store with an opportunistic remote mirror.
pub struct ReportStore {
    reports: Vec<Report>,
    cache: LocalCache,
    mirror: RemoteMirror,
    events: broadcast::Sender<StoreEvent>,
}

impl ReportStore {
    /// Open the store, loading whatever the cache holds. A corrupt or
    /// missing cache yields an empty collection, so opening cannot fail.
    pub fn open(cache: LocalCache, mirror: RemoteMirror) -> Self {
        let reports = cache.load();
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            reports,
            cache,
            mirror,
            events,
        }
    }

    /// The full collection, newest first.
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Subscribe to change notifications. Each mutation emits one event
    /// after the local state and cache have been updated.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// The visible subset of reports under `criteria` (pure, order
    /// preserving).
    pub fn visible(&self, criteria: &FilterCriteria) -> Vec<Report> {
        filter::visible(&self.reports, criteria)
    }

    /// Distinct locations appearing in the collection, in collection
    /// order. Feeds the location filter dropdown.
    pub fn locations(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for report in &self.reports {
            if !seen.contains(&report.location) {
                seen.push(report.location.clone());
            }
        }
        seen
    }

    /// Submit a new report.
    ///
    /// Validation failure aborts before any state changes. Otherwise the
    /// report is prepended and persisted locally first; the remote create
    /// then runs, and on success its representation (id included) replaces
    /// the provisional record. Remote failure leaves the provisional
    /// record untouched and is not surfaced to the caller.
    pub async fn submit(&mut self, draft: ReportDraft) -> Result<Report, CoreError> {
        let report = Report::create(draft)?;
        let provisional_id = report.id.clone();

        self.reports.insert(0, report.clone());
        self.persist();
        self.notify(StoreEvent::Submitted {
            id: provisional_id.clone(),
        });

        match self.mirror.create(&report).await {
            Ok(saved) => {
                if let Some(local) = self.reports.iter_mut().find(|r| r.id == provisional_id) {
                    *local = saved.clone();
                    self.persist();
                }
                Ok(saved)
            }
            Err(e) => {
                tracing::warn!(id = %provisional_id, error = %e, "Remote create failed, keeping local record");
                Ok(report)
            }
        }
    }

    /// Delete the report with `id`. Local deletion proceeds regardless of
    /// the remote outcome.
    pub async fn delete(&mut self, id: &str) {
        self.reports.retain(|r| r.id != id);
        self.persist();
        self.notify(StoreEvent::Deleted { id: id.to_string() });

        if let Err(e) = self.mirror.delete(id).await {
            tracing::warn!(id, error = %e, "Remote delete failed");
        }
    }

    /// Toggle the follow-up flag on the report with `id`, optimistically.
    ///
    /// The local toggle is never rolled back, whatever the remote returns
    /// (a 404 is treated like any other mirror failure).
    pub async fn toggle_follow_up(&mut self, id: &str) -> Result<Report, CoreError> {
        let report = self
            .reports
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| CoreError::NotFound { id: id.to_string() })?;
        report.follow_up_done = !report.follow_up_done;
        let updated = report.clone();

        self.persist();
        self.notify(StoreEvent::FollowUpToggled { id: id.to_string() });

        if let Err(e) = self.mirror.toggle_follow_up(id).await {
            tracing::warn!(id, error = %e, "Remote follow-up toggle failed");
        }

        Ok(updated)
    }

    /// Clear the whole collection. The local clear proceeds regardless of
    /// the remote outcome.
    pub async fn reset(&mut self) {
        self.reports.clear();
        self.persist();
        self.notify(StoreEvent::Reset);

        if let Err(e) = self.mirror.reset().await {
            tracing::warn!(error = %e, "Remote reset failed");
        }
    }

    /// Import a JSON document, prepending every record to the collection.
    ///
    /// No deduplication and no id-collision checks; a format error aborts
    /// the import with nothing merged. Imported records are not mirrored
    /// remotely.
    pub fn import_json(&mut self, input: &str) -> Result<usize, CoreError> {
        let mut incoming = codec::import_json(input)?;
        let count = incoming.len();

        incoming.append(&mut self.reports);
        self.reports = incoming;
        self.persist();
        self.notify(StoreEvent::Imported { count });

        Ok(count)
    }

    /// Export the full collection as a JSON array.
    pub fn export_json(&self) -> String {
        codec::export_json(&self.reports)
    }

    fn persist(&self) {
        // Storage faults degrade to in-memory operation, matching the
        // read side; nothing propagates up to crash the client.
        if let Err(e) = self.cache.save(&self.reports) {
            tracing::warn!(error = %e, "Failed to persist report cache");
        }
    }

    fn notify(&self, event: StoreEvent) {
        // A send error only means there are no subscribers right now.
        let _ = self.events.send(event);
    }
}
