//! Fake Inference Client - 用于测试的推理客户端
//!
//! 不发送网络请求；按脚本返回结果，并记录调用次数与请求内容

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::application::ports::{InferenceEnginePort, InferenceError, RequestHeaders};
use crate::domain::task::InferenceRequest;

type Responder = dyn Fn(usize, &InferenceRequest) -> Result<Value, InferenceError> + Send + Sync;

/// 记录下来的一次调用
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub endpoint_url: String,
    pub headers: RequestHeaders,
    pub request: InferenceRequest,
}

/// Fake Inference Client
pub struct FakeInferenceClient {
    responder: Box<Responder>,
    /// 第 N 次调用（从 0 开始）返回的错误
    failure: Option<(usize, InferenceError)>,
    calls: AtomicUsize,
    recorded: Mutex<Vec<RecordedCall>>,
}

impl FakeInferenceClient {
    /// 使用自定义响应函数，参数为调用序号和请求
    pub fn with_responder<F>(responder: F) -> Self
    where
        F: Fn(usize, &InferenceRequest) -> Result<Value, InferenceError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            failure: None,
            calls: AtomicUsize::new(0),
            recorded: Mutex::new(Vec::new()),
        }
    }

    /// 把请求文本（和标签）原样返回
    pub fn echo() -> Self {
        Self::with_responder(|_, request| {
            let mut body = json!({ "inputs": request.text.as_str() });
            if let Some(labels) = &request.labels {
                body["candidate_labels"] = json!(labels);
            }
            Ok(body)
        })
    }

    /// 按顺序返回预设结果，用完后返回 InvalidResponse
    pub fn scripted(responses: Vec<Value>) -> Self {
        Self::with_responder(move |index, _| {
            responses.get(index).cloned().ok_or_else(|| {
                InferenceError::InvalidResponse(format!("no scripted response for call #{}", index))
            })
        })
    }

    /// 第 `index` 次调用（从 0 开始）返回 `error`
    pub fn fail_at(mut self, index: usize, error: InferenceError) -> Self {
        self.failure = Some((index, error));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.recorded
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl InferenceEnginePort for FakeInferenceClient {
    async fn call(
        &self,
        endpoint_url: &str,
        headers: &RequestHeaders,
        request: &InferenceRequest,
    ) -> Result<Value, InferenceError> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);

        if let Ok(mut recorded) = self.recorded.lock() {
            recorded.push(RecordedCall {
                endpoint_url: endpoint_url.to_string(),
                headers: headers.clone(),
                request: request.clone(),
            });
        }

        tracing::debug!(
            call_index = index,
            endpoint_url = %endpoint_url,
            "FakeInferenceClient: returning scripted result"
        );

        if let Some((fail_index, error)) = &self.failure {
            if *fail_index == index {
                return Err(error.clone());
            }
        }

        (self.responder)(index, request)
    }
}
