use serde::{Deserialize, Serialize};

/// Failure payload attached to a failed test.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TestError {
    #[serde(default)]
    pub message: Option<String>,
}

/// One finished test as reported by the runner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestOutcome {
    pub title: String,

    /// Runner state, expected to be `passed`, `failed` or `skipped`.
    #[serde(default)]
    pub state: String,

    /// Elapsed milliseconds.
    #[serde(default)]
    pub duration: f64,

    #[serde(default)]
    pub error: Option<TestError>,
}

impl TestOutcome {
    pub fn failure_message(&self) -> Option<&str> {
        self.error.as_ref().and_then(|e| e.message.as_deref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SuiteOutcome {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tests: Vec<TestOutcome>,
}

/// Payload of a single "suite ended" notification. Absent keys leave the
/// accumulated tree untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SuiteFragment {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tests: Option<Vec<TestOutcome>>,
    #[serde(default)]
    pub suites: Option<Vec<SuiteOutcome>>,
}

/// Accumulated view of the run in progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutcomeTree {
    pub title: Option<String>,
    pub tests: Vec<TestOutcome>,
    pub suites: Vec<SuiteOutcome>,
}

impl OutcomeTree {
    /// Shallow merge: every key present in the fragment replaces the stored one.
    pub fn merge(&mut self, fragment: SuiteFragment) {
        if let Some(title) = fragment.title {
            self.title = Some(title);
        }
        if let Some(tests) = fragment.tests {
            self.tests = tests;
        }
        if let Some(suites) = fragment.suites {
            self.suites = suites;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty() && self.suites.is_empty()
    }
}

/// A node holding zero or more tests: the tree root or one of its suites.
pub trait TestContainer {
    fn label(&self) -> &str;
    fn tests(&self) -> &[TestOutcome];
}

impl TestContainer for OutcomeTree {
    fn label(&self) -> &str {
        self.title.as_deref().unwrap_or("<root>")
    }

    fn tests(&self) -> &[TestOutcome] {
        &self.tests
    }
}

impl TestContainer for SuiteOutcome {
    fn label(&self) -> &str {
        &self.title
    }

    fn tests(&self) -> &[TestOutcome] {
        &self.tests
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test(title: &str) -> TestOutcome {
        TestOutcome {
            title: title.into(),
            state: "passed".into(),
            duration: 1.0,
            error: None,
        }
    }

    #[test]
    fn merge_replaces_present_keys_only() {
        let mut tree = OutcomeTree::default();
        tree.merge(SuiteFragment {
            title: Some("login.spec".into()),
            tests: Some(vec![test("a #000001")]),
            suites: Some(vec![SuiteOutcome {
                title: "nested".into(),
                tests: vec![test("b #000002")],
            }]),
        });
        tree.merge(SuiteFragment {
            title: Some("checkout.spec".into()),
            tests: Some(vec![test("c #000003")]),
            suites: None,
        });

        assert_eq!(tree.title.as_deref(), Some("checkout.spec"));
        assert_eq!(tree.tests, vec![test("c #000003")]);
        assert_eq!(tree.suites.len(), 1);
        assert_eq!(tree.suites[0].title, "nested");
    }

    #[test]
    fn fragment_decodes_runner_payload() {
        let raw = r#"{
            "title": "login",
            "tests": [
                {"title": "login works #123456", "state": "failed", "duration": 420.4,
                 "error": {"message": "timeout", "stack": "..."}}
            ],
            "hooks": []
        }"#;
        let fragment: SuiteFragment = serde_json::from_str(raw).unwrap();
        let tests = fragment.tests.unwrap();
        assert_eq!(tests.len(), 1);
        assert_eq!(tests[0].failure_message(), Some("timeout"));
        assert!(fragment.suites.is_none());
    }

    #[test]
    fn container_label_falls_back_for_untitled_root() {
        let tree = OutcomeTree::default();
        assert_eq!(tree.label(), "<root>");
        assert!(tree.is_empty());
    }
}
