//! 异步API
//!
//! 这个模块提供了应用可以直接调用的解析与导出接口

use std::path::Path;
use log::info;
use thiserror::Error;
use crate::models::Conf;
use crate::parser::{FountainParser, ParseOutput};

/// API错误
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON错误: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// 导出结果
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub success: bool,
    pub message: String,
    pub file_path: Option<String>,
}

/// 将解析结果序列化为JSON
pub fn to_json(output: &ParseOutput, config: &Conf) -> ApiResult<String> {
    let json = if config.pretty_json {
        serde_json::to_string_pretty(output)?
    } else {
        serde_json::to_string(output)?
    };
    Ok(json)
}

/// 从JSON文件读取配置
pub async fn load_conf(path: impl AsRef<Path>) -> ApiResult<Conf> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

/// 解析Fountain文本，返回JSON
pub async fn parse_fountain_text(text: String, config: Option<Conf>) -> String {
    let conf = config.unwrap_or_default();
    let mut parser = FountainParser::new();
    let result = parser.parse(&text, &conf);

    to_json(&result, &conf).unwrap_or_else(|_| "{}".to_string())
}

/// 读取并解析Fountain文件
pub async fn parse_fountain_file(path: impl AsRef<Path>, config: Option<Conf>) -> ApiResult<ParseOutput> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path).await?;
    let conf = config.unwrap_or_default();

    let mut parser = FountainParser::new();
    let result = parser.parse(&text, &conf);
    info!(
        "解析 {} 完成: {} 个段落, 耗时 {}ms",
        path.display(),
        result.document.body.len(),
        result.parse_time
    );
    Ok(result)
}

/// 导出JSON文档
pub async fn export_to_json(
    text: String,
    output_path: String,
    config: Option<Conf>
) -> ExportResult {
    let conf = config.unwrap_or_default();

    // 解析文本
    let mut parser = FountainParser::new();
    let parsed = parser.parse(&text, &conf);

    let written = match to_json(&parsed, &conf) {
        Ok(json) => tokio::fs::write(&output_path, json).await.map_err(ApiError::from),
        Err(e) => Err(e),
    };

    match written {
        Ok(_) => ExportResult {
            success: true,
            message: "JSON导出成功".to_string(),
            file_path: Some(output_path),
        },
        Err(e) => ExportResult {
            success: false,
            message: format!("导出失败: {}", e),
            file_path: None,
        },
    }
}
