//! Request command - raw access to the backend through the client

use anyhow::Context;
use tomctl::client::{ApiRequest, Method};
use tomctl::output::{OutputMode, ResponseResult};

/// Send one request and print the response
pub async fn request(
    method: &str,
    path: &str,
    data: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let method: Method = method.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let mut request = ApiRequest::new(method, path);
    if let Some(data) = data {
        let body = serde_json::from_str(data).context("--data is not valid JSON")?;
        request = request.with_body(body);
    }

    let client = super::connect()?;
    let response = client.send(request).await?;

    let body = if response.body.is_empty() {
        serde_json::Value::Null
    } else {
        response.json().unwrap_or_else(|_| serde_json::Value::String(response.text()))
    };

    ResponseResult {
        status: response.status,
        body,
    }
    .render(mode);
    Ok(())
}
