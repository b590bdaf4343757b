//! Pure GitHub REST API client.
//!
//! A minimal client for the parts of the GitHub v3 API the follower
//! pipeline needs: listing organization members, fetching user profiles,
//! and creating follow relationships.
//!
//! # Example
//!
//! ```rust,ignore
//! use github_client::GithubClient;
//!
//! let github = GithubClient::new("my-login", "my-token")?;
//!
//! let members = github.org_members("rust-lang", 0).await?;
//! for member in &members {
//!     println!("{}", member.login);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{GithubError, Result};
pub use types::{MemberSummary, UserProfile};

use serde::de::DeserializeOwned;

const BASE_URL: &str = "https://api.github.com";

/// GitHub requires an identifying User-Agent on every API request.
const USER_AGENT: &str = concat!("org-follower/", env!("CARGO_PKG_VERSION"));

pub struct GithubClient {
    client: reqwest::Client,
    username: String,
    token: String,
    base_url: String,
}

impl GithubClient {
    /// Create a client that authenticates as `username` with a personal
    /// access token.
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            username: username.into(),
            token: token.into(),
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API root. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// List one page of an organization's members.
    pub async fn org_members(&self, org: &str, page: u32) -> Result<Vec<MemberSummary>> {
        let url = format!("{}/orgs/{}/members?page={}", self.base_url, org, page);
        self.get_json(url).await
    }

    /// Fetch a single user profile.
    pub async fn user(&self, login: &str) -> Result<UserProfile> {
        let url = format!("{}/users/{}", self.base_url, login);
        self.get_json(url).await
    }

    /// Follow a user as the authenticated account. GitHub answers 204 with
    /// an empty body; the body is ignored either way.
    pub async fn follow(&self, login: &str) -> Result<()> {
        let url = format!("{}/user/following/{}", self.base_url, login);
        let resp = self
            .client
            .put(&url)
            .basic_auth(&self.username, Some(&self.token))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), url = %url, "follow request failed");
            return Err(GithubError::Status {
                status: status.as_u16(),
                url,
                body,
            });
        }

        Ok(())
    }

    /// GET a URL and decode the JSON body.
    ///
    /// A non-2xx status becomes [`GithubError::Status`] carrying the raw
    /// body for reporting. A body that is not the expected JSON becomes
    /// [`GithubError::Json`]; decoding never panics.
    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        let resp = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.token))
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %url, body = %body, "request failed");
            return Err(GithubError::Status {
                status: status.as_u16(),
                url,
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| GithubError::Json { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{basic_auth, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GithubClient {
        GithubClient::new("someone", "secret")
            .unwrap()
            .with_base_url(server.uri())
    }

    #[tokio::test]
    async fn org_members_parses_listing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/acme/members"))
            .and(query_param("page", "2"))
            .and(basic_auth("someone", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"login": "alice", "id": 1},
                {"login": "bob", "id": 2}
            ])))
            .mount(&server)
            .await;

        let members = client_for(&server).org_members("acme", 2).await.unwrap();
        let logins: Vec<_> = members.iter().map(|m| m.login.as_str()).collect();
        assert_eq!(logins, ["alice", "bob"]);
    }

    #[tokio::test]
    async fn requests_carry_identifying_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/alice"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"login": "alice", "public_repos": 4})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let profile = client_for(&server).user("alice").await.unwrap();
        assert_eq!(profile.public_repos, 4);
    }

    #[tokio::test]
    async fn non_2xx_status_is_a_typed_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/ghost"))
            .respond_with(
                ResponseTemplate::new(404).set_body_string(r#"{"message": "Not Found"}"#),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).user("ghost").await.unwrap_err();
        match err {
            GithubError::Status { status, url, body } => {
                assert_eq!(status, 404);
                assert!(url.ends_with("/users/ghost"));
                assert!(body.contains("Not Found"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_body_is_contained() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/alice"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).user("alice").await.unwrap_err();
        assert!(matches!(err, GithubError::Json { .. }));
    }

    #[tokio::test]
    async fn follow_issues_authenticated_put() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/user/following/alice"))
            .and(basic_auth("someone", "secret"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).follow("alice").await.unwrap();
    }

    #[tokio::test]
    async fn follow_reports_status_failures() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/user/following/alice"))
            .respond_with(ResponseTemplate::new(403).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let err = client_for(&server).follow("alice").await.unwrap_err();
        assert_eq!(err.status(), Some(403));
    }
}
