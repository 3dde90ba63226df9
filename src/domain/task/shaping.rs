//! Result Shaping - 把原始 JSON 结果整理成扁平表格
//!
//! 抽取任务: 每个 (行号, 实体序号) 一行
//! 分类任务: 每个输入行一行，分数转换为百分比字符串

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use super::kind::TaskKind;

pub const ENTITY_COLUMNS: [&str; 7] = [
    "keyphrase_id",
    "entity_id",
    "word",
    "entity_group",
    "score",
    "start",
    "end",
];

pub const CLASSIFICATION_COLUMNS: [&str; 3] = ["keyphrase", "labels", "classification_scores"];

/// 结果形状错误
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("result #{index} does not match the {kind} response shape: {source}")]
    UnexpectedShape {
        index: usize,
        kind: TaskKind,
        #[source]
        source: serde_json::Error,
    },
}

/// 扁平表格，供外部渲染器展示
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl ResultTable {
    fn with_columns(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 按列名取单元格
    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(col)
    }
}

/// NER 实体记录（只取需要的字段）
#[derive(Debug, Deserialize)]
struct EntityRecord {
    word: String,
    entity_group: String,
    score: f64,
    #[serde(default)]
    start: Option<u64>,
    #[serde(default)]
    end: Option<u64>,
}

/// 零样本分类结果
#[derive(Debug, Deserialize)]
struct ClassificationRecord {
    sequence: String,
    labels: Vec<String>,
    scores: Vec<f64>,
}

/// 按任务种类分派
pub fn shape_results(kind: TaskKind, results: &[Value]) -> Result<ResultTable, ShapeError> {
    match kind {
        TaskKind::NamedEntityRecognition => shape_entities(results),
        TaskKind::ZeroShotClassification => shape_classifications(results),
    }
}

/// 抽取结果整形
///
/// 行顺序：先按 keyphrase_id 升序，再按 entity_id 升序
pub fn shape_entities(results: &[Value]) -> Result<ResultTable, ShapeError> {
    let mut table = ResultTable::with_columns(&ENTITY_COLUMNS);

    for (keyphrase_id, result) in results.iter().enumerate() {
        let entities = Vec::<EntityRecord>::deserialize(result).map_err(|source| {
            ShapeError::UnexpectedShape {
                index: keyphrase_id,
                kind: TaskKind::NamedEntityRecognition,
                source,
            }
        })?;

        for (entity_id, entity) in entities.into_iter().enumerate() {
            table.rows.push(vec![
                json!(keyphrase_id),
                json!(entity_id),
                json!(entity.word),
                json!(entity.entity_group),
                json!(entity.score),
                json!(entity.start),
                json!(entity.end),
            ]);
        }
    }

    Ok(table)
}

/// 分类结果整形
///
/// `sequence` 重命名为 `keyphrase`，`scores` 转换为两位小数的百分比
pub fn shape_classifications(results: &[Value]) -> Result<ResultTable, ShapeError> {
    let mut table = ResultTable::with_columns(&CLASSIFICATION_COLUMNS);

    for (index, result) in results.iter().enumerate() {
        let record = ClassificationRecord::deserialize(result).map_err(|source| {
            ShapeError::UnexpectedShape {
                index,
                kind: TaskKind::ZeroShotClassification,
                source,
            }
        })?;

        let scores: Vec<String> = record.scores.iter().copied().map(format_percentage).collect();
        table
            .rows
            .push(vec![json!(record.sequence), json!(record.labels), json!(scores)]);
    }

    Ok(table)
}

/// 0.8421 -> "84.21%"
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}
