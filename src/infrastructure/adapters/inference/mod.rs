//! Inference Adapter - HuggingFace Inference API 客户端实现

mod fake_inference_client;
mod http_inference_client;

pub use fake_inference_client::{FakeInferenceClient, RecordedCall};
pub use http_inference_client::*;
