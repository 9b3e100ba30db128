use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::config::{RepoRef, Settings};
use crate::constants::{ACCEPT_MEDIA_TYPE, RATE_LIMIT_REMAINING_HEADER, USER_AGENT as CLIENT_ID};
use crate::error::{ProvisionError, ProvisionResult};
use crate::logging::log_debug;
use crate::models::{NewIssue, NewLabel, RemoteIssue, RemoteLabel};

/// Authenticated REST session against a single repository.
pub struct GitHubClient {
    client: reqwest::Client,
    api_base: Url,
    repo: RepoRef,
}

impl GitHubClient {
    pub fn new(settings: &Settings) -> ProvisionResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_MEDIA_TYPE));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_ID));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", settings.token))
            .map_err(|_| ProvisionError::InvalidInput("Token contains invalid characters".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(settings.request_timeout)
            .build()
            .map_err(ProvisionError::Transport)?;

        let api_base = Url::parse(&settings.api_base).map_err(|e| {
            ProvisionError::InvalidInput(format!("Invalid API URL '{}': {}", settings.api_base, e))
        })?;
        if api_base.cannot_be_a_base() {
            return Err(ProvisionError::InvalidInput(format!(
                "API URL '{}' cannot be used as a base",
                settings.api_base
            )));
        }

        Ok(Self {
            client,
            api_base,
            repo: settings.repo.clone(),
        })
    }

    pub fn repo(&self) -> &RepoRef {
        &self.repo
    }

    /// `GET /repos/{owner}/{repo}/labels/{name}`; a missing label is `NotFound`.
    pub async fn get_label(&self, name: &str) -> ProvisionResult<RemoteLabel> {
        let url = self.repo_url(&["labels", name]);
        let request = self.client.request(Method::GET, url);
        self.execute(request, &format!("label \"{}\"", name)).await
    }

    pub async fn create_label(&self, label: &NewLabel) -> ProvisionResult<RemoteLabel> {
        let url = self.repo_url(&["labels"]);
        let request = self.client.request(Method::POST, url).json(label);
        self.execute(request, &format!("label \"{}\"", label.name)).await
    }

    pub async fn create_issue(&self, issue: &NewIssue<'_>) -> ProvisionResult<RemoteIssue> {
        let url = self.repo_url(&["issues"]);
        let request = self.client.request(Method::POST, url).json(issue);
        self.execute(request, &format!("issue \"{}\"", issue.title)).await
    }

    fn repo_url(&self, segments: &[&str]) -> Url {
        let mut url = self.api_base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(["repos", self.repo.owner.as_str(), self.repo.name.as_str()])
                .extend(segments);
        }
        url
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        resource: &str,
    ) -> ProvisionResult<T> {
        let response = request.send().await?;
        log_rate_limit(&response);

        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(|e| {
                if e.is_decode() {
                    ProvisionError::InvalidResponse(format!("{}: {}", resource, e))
                } else {
                    ProvisionError::from(e)
                }
            });
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ProvisionError::NotFound(resource.to_string()));
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ProvisionError::RequestFailed {
            status: status.as_u16(),
            body,
        })
    }
}

fn log_rate_limit(response: &Response) {
    if let Some(remaining) = response
        .headers()
        .get(RATE_LIMIT_REMAINING_HEADER)
        .and_then(|v| v.to_str().ok())
    {
        log_debug(&format!(
            "{} {} (rate limit remaining: {})",
            response.status().as_u16(),
            response.url().path(),
            remaining
        ));
    }
}
