//! Notifications pushed by the test runner, in the JSON-lines shape the CLI
//! replays.

use serde::{Deserialize, Serialize};

use crate::errors::SyncError;
use crate::outcome::{RunSummary, SuiteFragment};
use crate::workflow::{SyncReport, SyncWorkflow};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    SuiteEnd { suite: SuiteFragment },
    RunnerEnd { runner: RunSummary },
}

/// Forwards events until the first `runner_end`, which drives the workflow to
/// completion. Later events are not consumed.
pub async fn replay<I>(workflow: &mut SyncWorkflow, events: I) -> Result<SyncReport, SyncError>
where
    I: IntoIterator<Item = HostEvent>,
{
    for event in events {
        match event {
            HostEvent::SuiteEnd { suite } => workflow.on_suite_observed(suite),
            HostEvent::RunnerEnd { runner } => return workflow.on_run_ended(runner).await,
        }
    }
    Err(SyncError::NoRunEnded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_both_event_kinds() {
        let suite: HostEvent = serde_json::from_str(
            r#"{"event":"suite_end","suite":{"title":"s",
                "tests":[{"title":"t #123456","state":"passed","duration":3}]}}"#,
        )
        .unwrap();
        match suite {
            HostEvent::SuiteEnd { suite } => assert_eq!(suite.tests.map(|t| t.len()), Some(1)),
            other => panic!("unexpected event: {other:?}"),
        }

        let end: HostEvent = serde_json::from_str(
            r#"{"event":"runner_end","runner":{"sanitizedCapabilities":"firefox.115.mac"}}"#,
        )
        .unwrap();
        assert_eq!(
            end,
            HostEvent::RunnerEnd {
                runner: RunSummary {
                    sanitized_capabilities: "firefox.115.mac".into()
                }
            }
        );
    }

    #[test]
    fn unknown_event_kind_is_rejected() {
        assert!(serde_json::from_str::<HostEvent>(r#"{"event":"hook_end"}"#).is_err());
    }
}
