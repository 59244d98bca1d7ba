pub mod models;
pub mod utils;
pub mod parser;
pub mod api;

pub use models::{
    Document,
    Paragraph,
    ParagraphType,
    Line,
    LineType,
    Chunk,
    Style,
    Token,
    TokenType,
    ScreenplayProperties,
    Conf
};

pub use parser::{
    FountainParser,
    ParseOutput,
    Lexer,
    StyleState,
    tokenize
};

pub use api::{
    ApiError,
    ApiResult,
    ExportResult,
    parse_fountain_text,
    parse_fountain_file,
    export_to_json
};

/// 解析Fountain格式文本
///
/// # Arguments
///
/// * `script` - Fountain格式的剧本文本
///
/// # Returns
///
/// 标题页字段与正文段落。输入不完整时返回已解析的部分，不会失败。
pub fn parse(script: &str) -> Document {
    FountainParser::new().parse_tokens(tokenize(script))
}

/// 按配置解析，同时返回统计信息和耗时
pub fn parse_with_conf(script: &str, config: &Conf) -> ParseOutput {
    let mut parser = FountainParser::new();
    parser.parse(script, config)
}
