use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::Serialize;
use tracing::debug;

use crate::error::{DocGuardError, Result};

use super::{ReviewComment, ReviewPoster};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Serialize)]
struct InlineComment<'a> {
    path: &'a str,
    line: usize,
    side: &'static str,
    body: &'a str,
}

#[derive(Serialize)]
struct ReviewRequest<'a> {
    body: &'a str,
    event: &'static str,
    comments: Vec<InlineComment<'a>>,
}

#[derive(Serialize)]
struct CommentRequest<'a> {
    body: &'a str,
}

/// Posts reviews through the GitHub REST API.
pub struct GithubReviewer {
    client: Client,
    api_url: String,
    repo: String,
    pull_request: u64,
    token: String,
}

impl GithubReviewer {
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(api_url: &str, repo: &str, pull_request: u64, token: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| DocGuardError::Review(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            repo: repo.to_string(),
            pull_request,
            token: token.to_string(),
        })
    }

    fn reviews_url(&self) -> String {
        format!(
            "{}/repos/{}/pulls/{}/reviews",
            self.api_url, self.repo, self.pull_request
        )
    }

    fn comments_url(&self) -> String {
        format!(
            "{}/repos/{}/issues/{}/comments",
            self.api_url, self.repo, self.pull_request
        )
    }

    fn review_body(comments: &[ReviewComment], summary: &str) -> Result<String> {
        let request = ReviewRequest {
            body: summary,
            event: "COMMENT",
            comments: comments
                .iter()
                .map(|c| InlineComment {
                    path: &c.path,
                    line: c.line,
                    side: "RIGHT",
                    body: &c.body,
                })
                .collect(),
        };
        Ok(serde_json::to_string(&request)?)
    }

    fn comment_body(body: &str) -> Result<String> {
        Ok(serde_json::to_string(&CommentRequest { body })?)
    }

    fn request(&self, url: &str, body: String) -> RequestBuilder {
        self.client
            .post(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, env!("CARGO_PKG_NAME"))
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header(CONTENT_TYPE, "application/json")
            .body(body)
    }

    #[cfg(not(tarpaulin_include))]
    fn send(&self, url: &str, body: String) -> Result<()> {
        debug!(url, "POST");
        let response = self.request(url, body).send().map_err(|e| {
            if e.is_timeout() {
                DocGuardError::Review(format!("Request timeout posting to {url}"))
            } else if e.is_connect() {
                DocGuardError::Review(format!("Failed to connect to {url}"))
            } else {
                DocGuardError::Review(format!("Failed to post to {url}: {e}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(DocGuardError::Review(format!(
                "{url} returned HTTP {status}: {}",
                text.trim()
            )));
        }
        Ok(())
    }
}

#[cfg(not(tarpaulin_include))]
impl ReviewPoster for GithubReviewer {
    fn post_review(&self, comments: &[ReviewComment], summary: &str) -> Result<()> {
        self.send(&self.reviews_url(), Self::review_body(comments, summary)?)
    }

    fn post_comment(&self, body: &str) -> Result<()> {
        self.send(&self.comments_url(), Self::comment_body(body)?)
    }
}

#[cfg(test)]
#[path = "github_tests.rs"]
mod tests;
