//! HTTP Inference Client - 调用 HuggingFace Inference API
//!
//! 实现 InferenceEnginePort trait
//!
//! POST {api_root}{checkpoint}
//! Request: {"inputs": "...", "parameters": {"candidate_labels": [...]}, "options": {"wait_for_model": true}}
//! Response: 任务相关的 JSON

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::application::ports::{InferenceEnginePort, InferenceError, RequestHeaders};
use crate::domain::task::InferenceRequest;

/// HTTP 推理客户端配置
#[derive(Debug, Clone)]
pub struct HttpInferenceClientConfig {
    /// 单次请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpInferenceClientConfig {
    fn default() -> Self {
        Self { timeout_secs: 10 }
    }
}

impl HttpInferenceClientConfig {
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 推理客户端
pub struct HttpInferenceClient {
    client: Client,
}

impl HttpInferenceClient {
    pub fn new(config: HttpInferenceClientConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| InferenceError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    pub fn with_default_config() -> Result<Self, InferenceError> {
        Self::new(HttpInferenceClientConfig::default())
    }
}

fn map_send_error(err: reqwest::Error) -> InferenceError {
    if err.is_timeout() {
        InferenceError::Timeout
    } else if err.is_connect() {
        InferenceError::Network(format!("Cannot connect to inference endpoint: {}", err))
    } else {
        InferenceError::Network(err.to_string())
    }
}

#[async_trait]
impl InferenceEnginePort for HttpInferenceClient {
    async fn call(
        &self,
        endpoint_url: &str,
        headers: &RequestHeaders,
        request: &InferenceRequest,
    ) -> Result<Value, InferenceError> {
        tracing::debug!(
            url = %endpoint_url,
            text_len = request.text.as_str().len(),
            labels = request.labels.as_ref().map(|l| l.len()).unwrap_or(0),
            "Sending inference request"
        );

        let mut builder = self.client.post(endpoint_url).json(&request.payload());
        for (name, value) in headers.iter() {
            builder = builder.header(name, value);
        }

        let response = builder.send().await.map_err(map_send_error)?;

        let status = response.status();
        // 读取响应体时也可能超时
        let body = response.text().await.map_err(map_send_error)?;

        // 只有 200 视为成功
        if status != reqwest::StatusCode::OK {
            tracing::warn!(
                url = %endpoint_url,
                status = status.as_u16(),
                "Inference endpoint returned an error"
            );
            return Err(InferenceError::RemoteError {
                status_code: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| InferenceError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::build_request;
    use crate::domain::{Label, TextLine};
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn line(text: &str) -> TextLine {
        TextLine::new(text).unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = HttpInferenceClientConfig::default();
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.with_timeout(3).timeout_secs, 3);
    }

    #[tokio::test]
    async fn test_call_sends_payload_and_bearer() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/valhalla/distilbart-mnli-12-3")
            .match_header("authorization", "Bearer hf_test")
            .match_body(Matcher::Json(json!({
                "inputs": "This book is interesting.",
                "parameters": {"candidate_labels": ["Positive", "Negative"]},
                "options": {"wait_for_model": true}
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"sequence":"This book is interesting.","labels":["Positive","Negative"],"scores":[0.9,0.1]}"#)
            .create_async()
            .await;

        let client = HttpInferenceClient::with_default_config().unwrap();
        let labels = vec![Label::new("Positive").unwrap(), Label::new("Negative").unwrap()];
        let request = build_request(line("This book is interesting."), Some(&labels));
        let url = format!("{}/valhalla/distilbart-mnli-12-3", server.url());

        let value = client
            .call(&url, &RequestHeaders::bearer("hf_test"), &request)
            .await
            .unwrap();
        assert_eq!(value["labels"][0], "Positive");
    }

    #[tokio::test]
    async fn test_call_omits_parameters_for_ner() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/dslim/bert-base-NER")
            .match_body(Matcher::Json(json!({
                "inputs": "Hanoi",
                "options": {"wait_for_model": true}
            })))
            .with_status(200)
            .with_body(r#"[{"entity_group":"LOC","score":0.99,"word":"Hanoi","start":0,"end":5}]"#)
            .create_async()
            .await;

        let client = HttpInferenceClient::with_default_config().unwrap();
        let url = format!("{}/dslim/bert-base-NER", server.url());
        let value = client
            .call(&url, &RequestHeaders::bearer("hf_test"), &build_request(line("Hanoi"), None))
            .await
            .unwrap();
        assert!(value.is_array());
    }

    #[tokio::test]
    async fn test_call_remote_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/dslim/bert-base-NER")
            .with_status(503)
            .with_body(r#"{"error":"Model is currently loading"}"#)
            .create_async()
            .await;

        let client = HttpInferenceClient::with_default_config().unwrap();
        let url = format!("{}/dslim/bert-base-NER", server.url());
        let err = client
            .call(&url, &RequestHeaders::new(), &build_request(line("Hanoi"), None))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            InferenceError::RemoteError {
                status_code: 503,
                body: r#"{"error":"Model is currently loading"}"#.to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_call_non_200_success_status_is_remote_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/dslim/bert-base-NER")
            .with_status(201)
            .with_body("[]")
            .create_async()
            .await;

        let client = HttpInferenceClient::with_default_config().unwrap();
        let url = format!("{}/dslim/bert-base-NER", server.url());
        let err = client
            .call(&url, &RequestHeaders::new(), &build_request(line("Hanoi"), None))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            InferenceError::RemoteError {
                status_code: 201,
                body: "[]".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_call_invalid_json() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/dslim/bert-base-NER")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = HttpInferenceClient::with_default_config().unwrap();
        let url = format!("{}/dslim/bert-base-NER", server.url());
        let err = client
            .call(&url, &RequestHeaders::new(), &build_request(line("Hanoi"), None))
            .await
            .unwrap_err();
        assert!(matches!(err, InferenceError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_call_timeout() {
        // 只监听不响应
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let client = HttpInferenceClient::new(HttpInferenceClientConfig::default().with_timeout(1)).unwrap();
        let url = format!("http://{}/dslim/bert-base-NER", addr);
        let err = client
            .call(&url, &RequestHeaders::new(), &build_request(line("Hanoi"), None))
            .await
            .unwrap_err();

        assert_eq!(err, InferenceError::Timeout);
        drop(listener);
    }

    #[tokio::test]
    async fn test_call_connection_refused() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        let client = HttpInferenceClient::with_default_config().unwrap();
        let url = format!("http://{}/dslim/bert-base-NER", addr);
        let err = client
            .call(&url, &RequestHeaders::new(), &build_request(line("Hanoi"), None))
            .await
            .unwrap_err();
        assert!(matches!(err, InferenceError::Network(_)));
    }
}
