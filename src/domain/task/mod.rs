//! Task Context - NLP 任务限界上下文
//!
//! 职责:
//! - 任务种类及其固定元数据
//! - 推理请求构造
//! - 提交校验
//! - 结果整形

mod errors;
mod kind;
mod request;
mod shaping;
mod validation;

pub use errors::TaskInputError;
pub use kind::TaskKind;
pub use request::{build_request, InferencePayload, InferenceRequest};
pub use shaping::{
    format_percentage, shape_classifications, shape_entities, shape_results, ResultTable,
    ShapeError, CLASSIFICATION_COLUMNS, ENTITY_COLUMNS,
};
pub use validation::validate_submission;
