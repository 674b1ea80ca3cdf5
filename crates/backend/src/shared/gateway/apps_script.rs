use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use super::{interpret, GatewayError, GatewayReply, GatewayRequest, SheetGateway};
use crate::shared::config::UpstreamConfig;

/// HTTP client for the Apps Script web app.
///
/// One attempt per call, no retries. Apps Script answers POSTs with a redirect
/// to the script output, which reqwest follows.
pub struct AppsScriptClient {
    client: reqwest::Client,
    upstream: UpstreamConfig,
}

impl AppsScriptClient {
    pub fn new(upstream: UpstreamConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, upstream })
    }
}

#[async_trait]
impl SheetGateway for AppsScriptClient {
    async fn call(&self, request: GatewayRequest) -> Result<GatewayReply, GatewayError> {
        if !self.upstream.is_configured() {
            return Err(GatewayError::NotConfigured);
        }

        tracing::debug!(
            action = request.action.as_str(),
            sheet = %request.sheet,
            "Apps Script request"
        );

        let response = self
            .client
            .post(&self.upstream.url)
            .bearer_auth(&self.upstream.secret)
            .json(&request.envelope())
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let result = interpret(content_type.as_deref(), &body);
        if let Err(GatewayError::NonJson(kind)) = &result {
            tracing::error!(
                "Apps Script returned {} with {} for {} on '{}', check the deployment",
                status,
                kind,
                request.action.as_str(),
                request.sheet
            );
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::gateway::Action;

    #[tokio::test]
    async fn placeholder_url_fails_before_network() {
        let client = AppsScriptClient::new(UpstreamConfig {
            url: "https://script.google.com/macros/s/YOUR_SCRIPT_ID/exec".into(),
            secret: "s".into(),
        })
        .unwrap();
        let err = client
            .call(GatewayRequest::new(Action::List, "branches"))
            .await
            .unwrap_err();
        assert_eq!(err, GatewayError::NotConfigured);
    }
}
