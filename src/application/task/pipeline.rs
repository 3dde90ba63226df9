//! 推理流水线
//!
//! 每行一个请求，按顺序逐个发送；任意一行失败即放弃整批

use serde_json::Value;

use crate::application::ports::{InferenceEnginePort, InferenceError, RequestHeaders};
use crate::domain::task::build_request;
use crate::domain::{Label, TextLine};

/// 依次查询每一行
///
/// 全部成功时返回与 `lines` 等长、同序的结果；
/// 出错时已累积的结果直接丢弃，不会返回部分结果
pub async fn query_lines<E>(
    engine: &E,
    endpoint_url: &str,
    headers: &RequestHeaders,
    lines: &[TextLine],
    labels: Option<&[Label]>,
) -> Result<Vec<Value>, InferenceError>
where
    E: InferenceEnginePort + ?Sized,
{
    let mut output = Vec::with_capacity(lines.len());

    for (index, line) in lines.iter().enumerate() {
        let request = build_request(line.clone(), labels);

        tracing::debug!(
            line_index = index,
            text_len = line.as_str().len(),
            with_labels = labels.is_some(),
            "Querying inference endpoint"
        );

        match engine.call(endpoint_url, headers, &request).await {
            Ok(result) => output.push(result),
            Err(e) => {
                tracing::warn!(
                    line_index = index,
                    completed = output.len(),
                    error = %e,
                    "Inference failed, abandoning batch"
                );
                return Err(e);
            }
        }
    }

    Ok(output)
}
