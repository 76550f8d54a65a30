//! reqwest-backed client for the case-management HTTP API.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use railsync_core::api::{
    routes, AddRunRequest, CreatedRun, RemoteError, RemoteRunClient, ResultsDocument, RunTest,
    SyncConfig,
};

pub struct HttpRunClient {
    /// Service root, always ending in `/`.
    root: String,
    /// Precomputed `Basic ...` header value.
    auth: String,
    client: reqwest::Client,
}

/// Upper bound on `get_tests` pages followed for one run.
const MAX_PAGES: usize = 1_000;

/// `get_tests` answers with a bare list on older servers and a page object on
/// newer ones.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TestsResponse {
    List(Vec<RunTest>),
    Page {
        tests: Vec<RunTest>,
        #[serde(default, rename = "_links")]
        links: Option<PageLinks>,
    },
}

#[derive(Debug, Default, Deserialize)]
struct PageLinks {
    #[serde(default)]
    next: Option<String>,
}

impl HttpRunClient {
    pub fn new(
        root: String,
        username: &str,
        password: &str,
        timeout_ms: u64,
    ) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| RemoteError::Transport(e.into()))?;

        let token =
            base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
        Ok(Self {
            root,
            auth: format!("Basic {token}"),
            client,
        })
    }

    pub fn from_config(cfg: &SyncConfig) -> Result<Self, RemoteError> {
        Self::new(cfg.service_url(), &cfg.username, &cfg.password, cfg.timeout_ms)
    }

    fn url(&self, route: &str) -> String {
        format!("{}{}", self.root, route)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RemoteError> {
        tracing::debug!(target: "railsync.http", %url, "GET");
        let resp = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, &self.auth)
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.into()))?;
        decode(ensure_success(resp)?).await
    }

    async fn post(
        &self,
        url: &str,
        body: &impl serde::Serialize,
    ) -> Result<reqwest::Response, RemoteError> {
        tracing::debug!(target: "railsync.http", %url, "POST");
        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, &self.auth)
            .json(body)
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.into()))?;
        ensure_success(resp)
    }
}

fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    Err(RemoteError::HttpStatus {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
    })
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, RemoteError> {
    let bytes = resp
        .bytes()
        .await
        .map_err(|e| RemoteError::Transport(e.into()))?;
    serde_json::from_slice(&bytes).map_err(|e| RemoteError::Decode(e.into()))
}

#[async_trait]
impl RemoteRunClient for HttpRunClient {
    async fn add_run(
        &self,
        project_id: u64,
        req: &AddRunRequest,
    ) -> Result<CreatedRun, RemoteError> {
        let resp = self.post(&self.url(&routes::add_run(project_id)), req).await?;
        decode(resp).await
    }

    async fn get_tests(&self, run_id: u64) -> Result<Vec<RunTest>, RemoteError> {
        let mut url = self.url(&routes::get_tests(run_id));
        let mut visited = HashSet::new();
        let mut all = Vec::new();
        loop {
            if visited.len() >= MAX_PAGES {
                return Err(RemoteError::Decode(anyhow::anyhow!(
                    "get_tests for run {run_id} exceeded {MAX_PAGES} pages"
                )));
            }
            visited.insert(url.clone());

            match self.get_json::<TestsResponse>(&url).await? {
                TestsResponse::List(tests) => {
                    all.extend(tests);
                    return Ok(all);
                }
                TestsResponse::Page { tests, links } => {
                    all.extend(tests);
                    match links.and_then(|l| l.next) {
                        Some(next) if !next.is_empty() => {
                            url = self.url(&format!("index.php?{next}"));
                            if visited.contains(&url) {
                                return Err(RemoteError::Decode(anyhow::anyhow!(
                                    "get_tests pagination revisits {next}"
                                )));
                            }
                        }
                        _ => return Ok(all),
                    }
                }
            }
        }
    }

    async fn add_results_for_cases(
        &self,
        run_id: u64,
        results: &ResultsDocument,
    ) -> Result<(), RemoteError> {
        self.post(&self.url(&routes::add_results_for_cases(run_id)), results)
            .await?;
        tracing::info!(
            target: "railsync.http",
            run_id,
            results = results.results.len(),
            "results submitted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use railsync_core::api::{CaseResultRecord, CaseStatus};
    use serde_json::json;

    const AUTH: &str = "Basic Y2k6cHc=";

    fn client_for(server: &mockito::ServerGuard) -> HttpRunClient {
        HttpRunClient::new(format!("{}/", server.url()), "ci", "pw", 5_000).unwrap()
    }

    #[test]
    fn routes_are_joined_onto_root() {
        let client =
            HttpRunClient::new("https://acme.testrail.io/".into(), "ci", "pw", 1_000).unwrap();
        assert_eq!(
            client.url(&routes::add_run(4)),
            "https://acme.testrail.io/index.php?/api/v2/add_run/4"
        );
        assert_eq!(client.auth, AUTH);
    }

    #[tokio::test]
    async fn add_run_posts_body_with_basic_auth() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .match_header("authorization", AUTH)
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "description": "chrome.120.linux",
                "name": "Ignore",
                "suite_id": 2,
                "include_all": false
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 9, "name": "Ignore", "suite_id": 2}"#)
            .create_async()
            .await;

        let req = AddRunRequest {
            description: "chrome.120.linux".into(),
            name: "Ignore".into(),
            suite_id: 2,
            include_all: false,
        };
        let created = client_for(&server).add_run(1, &req).await.unwrap();

        assert_eq!(
            created,
            CreatedRun {
                id: 9,
                name: "Ignore".into()
            }
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_reported_with_reason() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", Matcher::Any)
            .with_status(400)
            .with_body(r#"{"error": "Field :suite_id is not a valid test suite."}"#)
            .create_async()
            .await;

        let req = AddRunRequest {
            description: String::new(),
            name: "Ignore".into(),
            suite_id: 99,
            include_all: true,
        };
        let err = client_for(&server).add_run(1, &req).await.unwrap_err();
        match err {
            RemoteError::HttpStatus { status, reason } => {
                assert_eq!(status, 400);
                assert_eq!(reason, "Bad Request");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_tests_accepts_bare_list() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", Matcher::Any)
            .match_header("authorization", AUTH)
            .with_status(200)
            .with_body(
                r#"[{"id": 1, "case_id": 123456, "title": "login"}, {"id": 2, "case_id": 654321}]"#,
            )
            .create_async()
            .await;

        let tests = client_for(&server).get_tests(9).await.unwrap();
        let ids: Vec<u64> = tests.iter().map(|t| t.case_id).collect();
        assert_eq!(ids, vec![123456, 654321]);
    }

    #[tokio::test]
    async fn get_tests_follows_page_links() {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("GET", Matcher::Any)
            .match_query(Matcher::Regex(r"^/api/v2/get_tests/9$".into()))
            .with_status(200)
            .with_body(
                json!({
                    "offset": 0, "limit": 1, "size": 1,
                    "_links": {"next": "/api/v2/get_tests/9&limit=1&offset=1", "prev": null},
                    "tests": [{"case_id": 1}]
                })
                .to_string(),
            )
            .create_async()
            .await;
        let second = server
            .mock("GET", Matcher::Any)
            .match_query(Matcher::Regex(r"offset=1".into()))
            .with_status(200)
            .with_body(
                json!({
                    "offset": 1, "limit": 1, "size": 1,
                    "_links": {"next": null, "prev": "/api/v2/get_tests/9&limit=1&offset=0"},
                    "tests": [{"case_id": 2}]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let tests = client_for(&server).get_tests(9).await.unwrap();
        let ids: Vec<u64> = tests.iter().map(|t| t.case_id).collect();
        assert_eq!(ids, vec![1, 2]);
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn get_tests_stops_on_a_page_linking_to_itself() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .with_status(200)
            .with_body(
                json!({
                    "_links": {"next": "/api/v2/get_tests/9&offset=0"},
                    "tests": [{"case_id": 1}]
                })
                .to_string(),
            )
            .expect(2)
            .create_async()
            .await;

        let result = tokio::time::timeout(
            std::time::Duration::from_secs(3),
            client_for(&server).get_tests(9),
        )
        .await
        .expect("pagination must terminate");

        assert!(matches!(result, Err(RemoteError::Decode(_))));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn undecodable_body_is_a_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", Matcher::Any)
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let err = client_for(&server).get_tests(9).await.unwrap_err();
        assert!(matches!(err, RemoteError::Decode(_)));
    }

    #[tokio::test]
    async fn add_results_posts_document() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .match_body(Matcher::Json(json!({
                "results": [{"case_id": 654321, "elapsed": 3, "status_id": 5, "comment": "timeout"}]
            })))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let doc = ResultsDocument {
            results: vec![CaseResultRecord {
                case_id: 654321,
                elapsed: 3,
                status_id: CaseStatus::Failed,
                comment: Some("timeout".into()),
            }],
        };
        client_for(&server).add_results_for_cases(9, &doc).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        let client = HttpRunClient::new("http://127.0.0.1:1/".into(), "ci", "pw", 2_000).unwrap();
        let err = client.get_tests(1).await.unwrap_err();
        assert!(matches!(err, RemoteError::Transport(_)));
    }
}
