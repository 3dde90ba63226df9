//! Task - configure / execute 生命周期
//!
//! 表现层唯一打交道的对象。把输入规范化、请求构造、远程调用和
//! 结果整形串成一次完整的渲染周期

use crate::application::error::ApplicationError;
use crate::application::ports::{InferenceEnginePort, InferenceError, RequestHeaders};
use crate::domain::task::{shape_results, validate_submission, TaskKind};
use crate::domain::{normalize_labels, normalize_lines, Checkpoint};

use super::config::{TaskConfig, TaskLimits};
use super::pipeline::query_lines;
use super::state::{FrameStatus, Layout, Notification, RenderFrame, SubmissionState, TaskForm};

pub const SUCCESS_MESSAGE: &str = "Finished querying HuggingFace API successfully!";
pub const TIMEOUT_MESSAGE: &str = "HTTP connection time out. Please try again!";

/// 一个已配置的任务
#[derive(Debug, Clone)]
pub struct Task {
    config: TaskConfig,
    api_root: String,
    /// 构造时读取一次 API token
    headers: RequestHeaders,
}

impl Task {
    /// 使用任务种类的默认配置创建
    pub fn new(
        kind: TaskKind,
        api_root: impl Into<String>,
        headers: RequestHeaders,
        limits: TaskLimits,
    ) -> Self {
        let api_root = api_root.into();
        Self {
            config: TaskConfig::defaults(kind, &api_root, limits),
            api_root,
            headers,
        }
    }

    /// 从已保存的配置恢复
    pub fn from_config(
        config: TaskConfig,
        api_root: impl Into<String>,
        headers: RequestHeaders,
    ) -> Self {
        Self {
            config,
            api_root: api_root.into(),
            headers,
        }
    }

    pub fn kind(&self) -> TaskKind {
        self.config.kind
    }

    pub fn config(&self) -> &TaskConfig {
        &self.config
    }

    /// 配置阶段：设置显示名称和 checkpoint，重新生成端点 URL
    ///
    /// 未提供的字段保持原值
    pub fn configure(
        &mut self,
        display_name: Option<&str>,
        checkpoint: Option<&str>,
    ) -> Result<&TaskConfig, ApplicationError> {
        if let Some(checkpoint) = checkpoint {
            let checkpoint = Checkpoint::new(checkpoint).map_err(ApplicationError::validation)?;
            self.config.endpoint_url = checkpoint.endpoint_url(&self.api_root);
            self.config.checkpoint = checkpoint;
        }

        if let Some(name) = display_name.map(str::trim).filter(|n| !n.is_empty()) {
            self.config.display_name = name.to_string();
        }

        tracing::info!(
            task = %self.config.kind,
            display_name = %self.config.display_name,
            endpoint_url = %self.config.endpoint_url,
            "Task configured"
        );

        Ok(&self.config)
    }

    /// 执行一个渲染周期
    ///
    /// 传入上一周期的 `state`，返回的帧中携带新的状态。
    /// 校验失败和远程错误都转换为提示，不会作为 `Err` 返回
    pub async fn execute<E>(
        &self,
        engine: &E,
        form: &TaskForm,
        state: SubmissionState,
        layout: Layout,
    ) -> RenderFrame
    where
        E: InferenceEnginePort + ?Sized,
    {
        let kind = self.config.kind;
        let mut frame = self.empty_frame(state, layout);

        let lines = normalize_lines(&form.text, self.config.max_lines);
        if lines.truncated {
            frame.notifications.push(Notification::info(format!(
                "Only the first {} keyphrases are used.",
                self.config.max_lines
            )));
        }

        let labels = if kind.uses_labels() {
            let labels = normalize_labels(&form.labels, self.config.max_labels);
            if labels.truncated {
                frame.notifications.push(Notification::info(format!(
                    "Only the first {} labels are used.",
                    self.config.max_labels
                )));
            }
            Some(labels.items)
        } else {
            None
        };

        if !form.submitted && !frame.state.valid_inputs_received {
            return frame;
        }

        if form.submitted {
            let candidate_labels = labels.as_deref().unwrap_or(&[]);
            if let Err(reason) = validate_submission(kind, &lines.items, candidate_labels) {
                tracing::warn!(task = %kind, reason = %reason, "Submission rejected");
                frame.notifications.push(Notification::warning(reason.to_string()));
                frame.state.valid_inputs_received = false;
                frame.status = reason.into();
                return frame;
            }
            frame.state.valid_inputs_received = true;
        }

        tracing::info!(
            task = %kind,
            lines = lines.len(),
            resubmitted = !form.submitted,
            "Processing submission"
        );

        let results = match query_lines(
            engine,
            &self.config.endpoint_url,
            &self.headers,
            &lines.items,
            labels.as_deref(),
        )
        .await
        {
            Ok(results) => results,
            Err(e) => {
                tracing::error!(task = %kind, error = %e, "Inference batch failed");
                frame.notifications.extend(inference_error_notifications(&e));
                frame.status = FrameStatus::Failed;
                return frame;
            }
        };

        frame.notifications.push(Notification::success(SUCCESS_MESSAGE));

        match shape_results(kind, &results) {
            Ok(table) => {
                tracing::info!(task = %kind, rows = table.rows.len(), "Results shaped");
                frame.status = FrameStatus::Displayed;
                frame.table = Some(table);
            }
            Err(e) => {
                tracing::error!(task = %kind, error = %e, "Unexpected inference response");
                frame.notifications.push(Notification::error(format!(
                    "Unexpected response from the inference endpoint: {}",
                    e
                )));
                frame.status = FrameStatus::Failed;
            }
        }

        frame
    }

    fn empty_frame(&self, state: SubmissionState, layout: Layout) -> RenderFrame {
        RenderFrame {
            task: self.config.kind,
            display_name: self.config.display_name.clone(),
            endpoint_url: self.config.endpoint_url.clone(),
            status: FrameStatus::Idle,
            state,
            layout,
            notifications: Vec::new(),
            table: None,
        }
    }
}

/// 远程错误对应的用户提示
fn inference_error_notifications(error: &InferenceError) -> Vec<Notification> {
    match error {
        InferenceError::Timeout => vec![Notification::error(TIMEOUT_MESSAGE)],
        InferenceError::RemoteError { status_code, body } => vec![
            Notification::error(format!("Query error code: {}", status_code)),
            Notification::error(body.clone()),
        ],
        InferenceError::Network(detail) => vec![Notification::error(format!(
            "Could not reach the inference endpoint: {}",
            detail
        ))],
        InferenceError::InvalidResponse(detail) => vec![Notification::error(format!(
            "Unexpected response from the inference endpoint: {}",
            detail
        ))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::task::NotificationLevel;
    use crate::infrastructure::adapters::FakeInferenceClient;
    use serde_json::json;

    const API_ROOT: &str = "https://api-inference.huggingface.co/models/";

    fn task(kind: TaskKind) -> Task {
        Task::new(kind, API_ROOT, RequestHeaders::bearer("hf_test"), TaskLimits::default())
    }

    fn submit(text: &str, labels: &[&str]) -> TaskForm {
        TaskForm {
            submitted: true,
            text: text.to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    fn rerender(text: &str, labels: &[&str]) -> TaskForm {
        TaskForm {
            submitted: false,
            ..submit(text, labels)
        }
    }

    fn valid() -> SubmissionState {
        SubmissionState {
            valid_inputs_received: true,
        }
    }

    fn classification_echo() -> FakeInferenceClient {
        FakeInferenceClient::with_responder(|_, request| {
            let labels = request.labels.clone().unwrap_or_default();
            let scores: Vec<f64> = labels.iter().map(|_| 0.5).collect();
            Ok(json!({
                "sequence": request.text.as_str(),
                "labels": labels,
                "scores": scores,
            }))
        })
    }

    fn levels(frame: &RenderFrame) -> Vec<NotificationLevel> {
        frame.notifications.iter().map(|n| n.level).collect()
    }

    #[test]
    fn test_configure_updates_endpoint() {
        let mut task = task(TaskKind::NamedEntityRecognition);
        let config = task.configure(Some("My NER"), Some("Jean-Baptiste/roberta-large-ner-english")).unwrap();
        assert_eq!(config.display_name, "My NER");
        assert_eq!(
            config.endpoint_url,
            "https://api-inference.huggingface.co/models/Jean-Baptiste/roberta-large-ner-english"
        );
    }

    #[test]
    fn test_configure_rejects_blank_checkpoint() {
        let mut task = task(TaskKind::NamedEntityRecognition);
        assert!(task.configure(None, Some("  ")).is_err());
        assert_eq!(task.config().checkpoint.as_str(), "dslim/bert-base-NER");
    }

    #[tokio::test]
    async fn test_idle_without_submission() {
        let engine = FakeInferenceClient::echo();
        let frame = task(TaskKind::NamedEntityRecognition)
            .execute(&engine, &rerender("Hanoi", &[]), SubmissionState::default(), Layout::Centered)
            .await;

        assert_eq!(frame.status, FrameStatus::Idle);
        assert!(frame.table.is_none());
        assert!(frame.notifications.is_empty());
        assert_eq!(engine.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_text_rejected_and_flag_cleared() {
        let engine = FakeInferenceClient::echo();
        let frame = task(TaskKind::ZeroShotClassification)
            .execute(&engine, &submit("\n\n", &["A", "B"]), valid(), Layout::Centered)
            .await;

        assert_eq!(frame.status, FrameStatus::RejectedEmptyText);
        assert!(!frame.state.valid_inputs_received);
        assert_eq!(levels(&frame), vec![NotificationLevel::Warning]);
        assert_eq!(frame.notifications[0].message, "There is no keyphrases to classify");
        assert_eq!(engine.call_count(), 0);
    }

    #[tokio::test]
    async fn test_label_preconditions_make_no_calls() {
        let cases: [(&[&str], FrameStatus); 4] = [
            (&[], FrameStatus::RejectedNoLabels),
            (&[""], FrameStatus::RejectedNoLabels),
            (&["Positive"], FrameStatus::RejectedSingleLabel),
            (&["Positive", "Positive"], FrameStatus::RejectedSingleLabel),
        ];

        for (labels, expected) in cases {
            let engine = classification_echo();
            let frame = task(TaskKind::ZeroShotClassification)
                .execute(&engine, &submit("This book is interesting.", labels), valid(), Layout::Centered)
                .await;

            assert_eq!(frame.status, expected, "labels: {:?}", labels);
            assert!(!frame.state.valid_inputs_received);
            assert!(frame.table.is_none());
            assert_eq!(engine.call_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_extraction_has_no_label_precondition() {
        let engine = FakeInferenceClient::scripted(vec![json!([
            {"entity_group": "LOC", "score": 0.99, "word": "Hanoi", "start": 0, "end": 5},
            {"entity_group": "LOC", "score": 0.98, "word": "Vietnam", "start": 24, "end": 31}
        ])]);
        let frame = task(TaskKind::NamedEntityRecognition)
            .execute(
                &engine,
                &submit("Hanoi is the capital of Vietnam.\nHanoi is the capital of Vietnam.\n", &[]),
                SubmissionState::default(),
                Layout::Centered,
            )
            .await;

        assert_eq!(frame.status, FrameStatus::Displayed);
        assert!(frame.state.valid_inputs_received);
        assert_eq!(engine.call_count(), 1);

        let call = &engine.recorded_calls()[0];
        assert_eq!(call.request.labels, None);
        assert_eq!(
            call.endpoint_url,
            "https://api-inference.huggingface.co/models/dslim/bert-base-NER"
        );
        assert_eq!(call.headers.get("Authorization"), Some("Bearer hf_test"));

        let table = frame.table.unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.cell(1, "word"), Some(&json!("Vietnam")));
    }

    #[tokio::test]
    async fn test_classification_displayed() {
        let engine = FakeInferenceClient::scripted(vec![json!({
            "sequence": "This book is interesting.",
            "labels": ["Positive", "Negative"],
            "scores": [0.9123, 0.0877]
        })]);
        let frame = task(TaskKind::ZeroShotClassification)
            .execute(
                &engine,
                &submit("This book is interesting.", &["Positive", "Negative"]),
                SubmissionState::default(),
                Layout::Wide,
            )
            .await;

        assert_eq!(frame.status, FrameStatus::Displayed);
        assert_eq!(frame.layout, Layout::Wide);
        assert_eq!(levels(&frame), vec![NotificationLevel::Success]);
        assert_eq!(frame.notifications[0].message, SUCCESS_MESSAGE);

        let table = frame.table.unwrap();
        assert_eq!(table.cell(0, "classification_scores"), Some(&json!(["91.23%", "8.77%"])));

        let request = &engine.recorded_calls()[0].request;
        let labels: Vec<&str> = request.labels.as_ref().unwrap().iter().map(|l| l.as_str()).collect();
        assert_eq!(labels, vec!["Positive", "Negative"]);
    }

    #[tokio::test]
    async fn test_failure_on_third_of_five_yields_no_table() {
        let engine = classification_echo().fail_at(
            2,
            InferenceError::RemoteError {
                status_code: 503,
                body: "Service Unavailable".to_string(),
            },
        );
        let frame = task(TaskKind::ZeroShotClassification)
            .execute(&engine, &submit("a\nb\nc\nd\ne", &["X", "Y"]), SubmissionState::default(), Layout::Centered)
            .await;

        assert_eq!(frame.status, FrameStatus::Failed);
        assert!(frame.table.is_none());
        assert_eq!(engine.call_count(), 3);
        assert_eq!(levels(&frame), vec![NotificationLevel::Error, NotificationLevel::Error]);
        assert_eq!(frame.notifications[0].message, "Query error code: 503");
        assert_eq!(frame.notifications[1].message, "Service Unavailable");
        // 校验已通过，标志保持有效
        assert!(frame.state.valid_inputs_received);
    }

    #[tokio::test]
    async fn test_timeout_notification() {
        let engine = FakeInferenceClient::echo().fail_at(0, InferenceError::Timeout);
        let frame = task(TaskKind::NamedEntityRecognition)
            .execute(&engine, &submit("Hanoi", &[]), SubmissionState::default(), Layout::Centered)
            .await;

        assert_eq!(frame.status, FrameStatus::Failed);
        assert_eq!(frame.notifications, vec![Notification::error(TIMEOUT_MESSAGE)]);
    }

    #[tokio::test]
    async fn test_rerender_with_valid_flag_reruns_pipeline() {
        let engine = classification_echo();
        let frame = task(TaskKind::ZeroShotClassification)
            .execute(&engine, &rerender("x\ny", &["A", "B"]), valid(), Layout::Wide)
            .await;

        assert_eq!(frame.status, FrameStatus::Displayed);
        assert!(frame.state.valid_inputs_received);
        assert_eq!(engine.call_count(), 2);
        assert_eq!(frame.table.unwrap().rows.len(), 2);
    }

    #[tokio::test]
    async fn test_truncation_notices() {
        let engine = classification_echo();
        let frame = task(TaskKind::ZeroShotClassification)
            .execute(
                &engine,
                &submit("1\n2\n3\n4\n5\n6", &["A", "B", "C", "D"]),
                SubmissionState::default(),
                Layout::Centered,
            )
            .await;

        assert_eq!(engine.call_count(), 5);
        assert_eq!(
            frame.notifications[..2],
            [
                Notification::info("Only the first 5 keyphrases are used."),
                Notification::info("Only the first 3 labels are used."),
            ]
        );
        assert_eq!(frame.status, FrameStatus::Displayed);
    }

    #[tokio::test]
    async fn test_unexpected_shape_reported_as_failure() {
        let engine = FakeInferenceClient::scripted(vec![json!({"error": "Model is loading"})]);
        let frame = task(TaskKind::NamedEntityRecognition)
            .execute(&engine, &submit("Hanoi", &[]), SubmissionState::default(), Layout::Centered)
            .await;

        assert_eq!(frame.status, FrameStatus::Failed);
        assert!(frame.table.is_none());
        assert_eq!(
            levels(&frame),
            vec![NotificationLevel::Success, NotificationLevel::Error]
        );
    }
}
