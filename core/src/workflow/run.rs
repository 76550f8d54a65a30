use std::path::PathBuf;
use std::sync::Arc;

use super::flag::CompletionFlag;
use super::state::{RunState, SyncPhase};
use crate::config::{RunTarget, SyncConfig};
use crate::errors::{ConfigError, RemoteStep, SyncError};
use crate::mapping::{IdentifierMatcher, ResultMapper, ResultsDocument};
use crate::outcome::{OutcomeTree, RunSummary, SuiteFragment, TestContainer};
use crate::remote::{AddRunRequest, RemoteRunClient};
use crate::sink::ResultsSink;

/// Summary of a successful synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub run_id: u64,
    pub run_name: String,
    pub recorded: usize,
    pub excluded: usize,
    pub results_path: PathBuf,
}

/// Single-use workflow: collects suite fragments, then on run end creates the
/// remote run, maps results against its cases and persists them.
pub struct SyncWorkflow {
    cfg: SyncConfig,
    target: RunTarget,
    mapper: ResultMapper,
    client: Arc<dyn RemoteRunClient>,
    sink: Arc<dyn ResultsSink>,
    tree: OutcomeTree,
    state: RunState,
    phase: SyncPhase,
    done: CompletionFlag,
}

impl SyncWorkflow {
    pub fn new(
        cfg: SyncConfig,
        client: Arc<dyn RemoteRunClient>,
        sink: Arc<dyn ResultsSink>,
    ) -> Result<Self, ConfigError> {
        let target = cfg.validate()?;
        let mapper = ResultMapper::new(IdentifierMatcher::new(&cfg.case_id_pattern)?);
        Ok(Self {
            cfg,
            target,
            mapper,
            client,
            sink,
            tree: OutcomeTree::default(),
            state: RunState::default(),
            phase: SyncPhase::Idle,
            done: CompletionFlag::default(),
        })
    }

    pub fn is_synchronized(&self) -> bool {
        self.done.is_set()
    }

    pub fn completion_flag(&self) -> CompletionFlag {
        self.done.clone()
    }

    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn tree(&self) -> &OutcomeTree {
        &self.tree
    }

    pub fn on_suite_observed(&mut self, fragment: SuiteFragment) {
        if self.phase != SyncPhase::Idle {
            tracing::warn!(
                target: "railsync.workflow",
                phase = %self.phase,
                "suite notification after run end ignored"
            );
            return;
        }
        self.tree.merge(fragment);
    }

    /// Drives the whole sync to a terminal phase. The completion flag is
    /// raised whether this returns `Ok` or `Err`.
    pub async fn on_run_ended(&mut self, summary: RunSummary) -> Result<SyncReport, SyncError> {
        if self.phase != SyncPhase::Idle {
            return Err(SyncError::AlreadyCompleted);
        }

        match self.drive(&summary).await {
            Ok(report) => {
                self.transition(SyncPhase::Synchronized);
                self.done.set();
                tracing::info!(
                    target: "railsync.workflow",
                    run_id = report.run_id,
                    recorded = report.recorded,
                    excluded = report.excluded,
                    path = %report.results_path.display(),
                    "run results have been saved successfully"
                );
                Ok(report)
            }
            Err(err) => {
                let failed_in = self.phase;
                self.transition(SyncPhase::Failed);
                self.done.set();
                tracing::error!(
                    target: "railsync.workflow",
                    phase = %failed_in,
                    error = %err,
                    detail = ?err,
                    "sync failed"
                );
                Err(err)
            }
        }
    }

    async fn drive(&mut self, summary: &RunSummary) -> Result<SyncReport, SyncError> {
        self.transition(SyncPhase::RunCreating);
        let body = AddRunRequest {
            description: self.cfg.render_description(&summary.sanitized_capabilities),
            name: self.cfg.run_name.clone(),
            suite_id: self.target.suite_id,
            include_all: self.cfg.include_all,
        };
        let created = self
            .client
            .add_run(self.target.project_id, &body)
            .await
            .map_err(|e| SyncError::remote(RemoteStep::CreateRun, e))?;

        let tests = self
            .client
            .get_tests(created.id)
            .await
            .map_err(|e| SyncError::remote(RemoteStep::ListCases, e))?;

        self.state.remote_run_id = Some(created.id);
        self.state.remote_run_name = Some(created.name.clone());
        self.state.known_case_ids = tests.iter().map(|t| t.case_id).collect();
        tracing::info!(
            target: "railsync.workflow",
            run_id = created.id,
            run_name = %created.name,
            cases = self.state.known_case_ids.len(),
            "new run created"
        );
        self.transition(SyncPhase::RunCreated);

        self.transition(SyncPhase::Mapping);
        let excluded = self.map_tree()?;

        self.transition(SyncPhase::Persisting);
        let doc = ResultsDocument {
            results: self.state.accumulated_results.clone(),
        };
        let results_path = self.sink.persist(&doc).await?;

        Ok(SyncReport {
            run_id: created.id,
            run_name: created.name,
            recorded: doc.results.len(),
            excluded,
            results_path,
        })
    }

    /// Root tests first, then every suite in arrival order. Returns how many
    /// tests were left out. Records reach the run state only when every node
    /// mapped cleanly.
    fn map_tree(&mut self) -> Result<usize, SyncError> {
        let known = &self.state.known_case_ids;
        let mut records = Vec::new();
        let mut excluded = 0;

        if !self.tree.tests().is_empty() {
            let mapped = self.mapper.map_node(&self.tree, known)?;
            excluded += mapped.misses.len();
            records.extend(mapped.records);
        }

        for suite in &self.tree.suites {
            if suite.tests.is_empty() {
                tracing::warn!(
                    target: "railsync.workflow",
                    suite = %suite.title,
                    "no tests found in suite"
                );
                continue;
            }
            let mapped = self.mapper.map_node(suite, known)?;
            excluded += mapped.misses.len();
            records.extend(mapped.records);
        }

        self.state.accumulated_results.extend(records);
        Ok(excluded)
    }

    fn transition(&mut self, next: SyncPhase) {
        tracing::debug!(
            target: "railsync.workflow",
            from = %self.phase,
            to = %next,
            "phase transition"
        );
        self.phase = next;
    }
}
