//! Backup orchestration
//!
//! One [`BackupRunner::run`] call performs a complete pass: health gate,
//! repository registration, snapshot creation, retention pruning. Every
//! step is attempted exactly once; a cron schedule is the retry policy.

use esback_client::SnapshotStore;
use esback_core::{
    BackupError, Result, SnapshotRecord, SnapshotState, local_now, prune_candidates,
    snapshot_name,
};
use esback_notify::Notifier;

/// Everything one backup pass needs to know.
#[derive(Debug, Clone)]
pub struct BackupPlan {
    pub repository: String,
    pub descriptor: esback_core::RepositoryDescriptor,
    pub prefix: String,
    pub retain: usize,
}

/// Outcome of a completed (exit 0) run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed { snapshot: String, pruned: usize },
    AlreadyBackedUp { snapshot: String },
}

pub struct BackupRunner<S> {
    store: S,
    notifier: Notifier,
    plan: BackupPlan,
}

impl<S: SnapshotStore> BackupRunner<S> {
    pub fn new(store: S, notifier: Notifier, plan: BackupPlan) -> Self {
        Self {
            store,
            notifier,
            plan,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Full backup pass. The first failing step aborts the run; only
    /// individual deletions during pruning are tolerated.
    pub async fn run(&self) -> Result<RunOutcome> {
        let health = match self.store.cluster_health().await {
            Ok(health) => health,
            Err(e) => return Err(self.fatal(e).await),
        };
        if !health.is_operational() {
            let err = BackupError::Connectivity(format!("cluster status is {health}"));
            return Err(self.fatal(err).await);
        }
        tracing::info!("cluster health is {health}");

        if let Err(e) = self.ensure_repository().await {
            return Err(self.fatal(e).await);
        }

        let name = snapshot_name(&self.plan.prefix, local_now());
        let listing = match self.store.list_snapshots(&self.plan.repository).await {
            Ok(listing) => listing,
            Err(e) => return Err(self.fatal(e).await),
        };

        // Rerun within the same minute: the name already exists and the
        // whole pass is a successful no-op.
        if listing.iter().any(|s| s.name == name) {
            tracing::info!("snapshot {name} already exists, nothing to do");
            self.notifier
                .notify(&format!("Snapshot {name} already exists, skipping run."))
                .await;
            return Ok(RunOutcome::AlreadyBackedUp { snapshot: name });
        }

        let created = match self.store.create_snapshot(&self.plan.repository, &name).await {
            Ok(snapshot) => snapshot,
            Err(e) => return Err(self.fatal(e).await),
        };
        if created.state != SnapshotState::Success {
            let err =
                BackupError::SnapshotCreation(name.clone(), format!("state {}", created.state));
            return Err(self.fatal(err).await);
        }
        tracing::info!("snapshot {name} created");

        // Retention runs over the pre-creation listing, so the snapshot
        // just taken never counts against its own retention window.
        let pruned = self.prune_listing(&listing).await;

        self.notifier
            .notify(&format!(
                "Backup {name} completed, pruned {pruned} old snapshot(s)."
            ))
            .await;
        Ok(RunOutcome::Completed {
            snapshot: name,
            pruned,
        })
    }

    /// Retention-only pass over the repository's current listing.
    pub async fn prune(&self) -> Result<usize> {
        let listing = match self.store.list_snapshots(&self.plan.repository).await {
            Ok(listing) => listing,
            Err(e) => return Err(self.fatal(e).await),
        };
        Ok(self.prune_listing(&listing).await)
    }

    /// Delete everything beyond the retention window, oldest first in the
    /// cluster's listing order. Best-effort: a failed deletion is reported
    /// and the loop moves on.
    async fn prune_listing(&self, listing: &[SnapshotRecord]) -> usize {
        let doomed = prune_candidates(listing, &self.plan.prefix, self.plan.retain);
        if doomed.is_empty() {
            tracing::debug!(
                "retention satisfied, {} snapshot(s) within limit {}",
                listing.len(),
                self.plan.retain
            );
            return 0;
        }

        let mut deleted = 0;
        for snap in doomed {
            match self
                .store
                .delete_snapshot(&self.plan.repository, &snap.name)
                .await
            {
                Ok(true) => {
                    tracing::info!("deleted old snapshot {}", snap.name);
                    deleted += 1;
                }
                Ok(false) => {
                    let err = BackupError::SnapshotDeletion(
                        snap.name.clone(),
                        "not acknowledged".to_string(),
                    );
                    tracing::warn!("{err}");
                    self.notifier.notify(&err.to_string()).await;
                }
                Err(e) => {
                    let err = BackupError::SnapshotDeletion(snap.name.clone(), e.to_string());
                    tracing::warn!("{err}");
                    self.notifier.notify(&err.to_string()).await;
                }
            }
        }
        deleted
    }

    /// Register the repository if it is missing. An existing repository
    /// is accepted as-is; its type and settings are never reconciled.
    async fn ensure_repository(&self) -> Result<()> {
        let repositories = self.store.list_repositories().await?;
        if repositories.contains_key(&self.plan.repository) {
            tracing::debug!("repository {} already registered", self.plan.repository);
            return Ok(());
        }

        if !self.plan.descriptor.has_settings() {
            return Err(BackupError::Repository(
                self.plan.repository.clone(),
                "no settings configured for repository creation".to_string(),
            ));
        }

        let acknowledged = self
            .store
            .create_repository(&self.plan.repository, &self.plan.descriptor)
            .await?;
        if !acknowledged {
            return Err(BackupError::Repository(
                self.plan.repository.clone(),
                "creation was not acknowledged".to_string(),
            ));
        }

        tracing::info!("registered snapshot repository {}", self.plan.repository);
        Ok(())
    }

    /// Log and report a fatal error before handing it back to the caller.
    async fn fatal(&self, err: BackupError) -> BackupError {
        tracing::error!("{err}");
        self.notifier.notify(&err.to_string()).await;
        err
    }
}
