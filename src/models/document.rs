use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// 行内样式，输出顺序固定为 bold, italic, underline, comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Bold,
    Italic,
    Underline,
    Comment,
}

/// 样式一致的一段文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub content: String,
    pub styles: Vec<Style>,
}

impl Chunk {
    pub fn new(content: impl Into<String>, styles: Vec<Style>) -> Self {
        Chunk {
            content: content.into(),
            styles,
        }
    }

    /// 无样式文本
    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, Vec::new())
    }

    pub fn has_style(&self, style: Style) -> bool {
        self.styles.contains(&style)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    Action,
    Speaker,
    Parenthetical,
    Dialogue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub line_type: LineType,
    pub chunks: Vec<Chunk>,
}

impl Line {
    pub fn new(line_type: LineType, chunks: Vec<Chunk>) -> Self {
        Line { line_type, chunks }
    }

    /// 去掉样式后的整行文本
    pub fn text(&self) -> String {
        self.chunks.iter().map(|c| c.content.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphType {
    Action,
    Dialogue,
}

/// 由空行分隔的段落
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub paragraph_type: ParagraphType,
    pub lines: Vec<Line>,
}

impl Paragraph {
    pub fn new(paragraph_type: ParagraphType, lines: Vec<Line>) -> Self {
        Paragraph { paragraph_type, lines }
    }

    /// 对白段落的角色名
    pub fn speaker(&self) -> Option<String> {
        if self.paragraph_type != ParagraphType::Dialogue {
            return None;
        }
        self.lines
            .iter()
            .find(|l| l.line_type == LineType::Speaker)
            .map(|l| l.text())
    }
}

/// 解析结果文档：标题页字段 + 正文段落
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub credit: String,
    pub author: String,
    pub draft_date: String,
    /// 其余标题页键值，重复键以后出现者为准
    pub data: HashMap<String, String>,
    pub body: Vec<Paragraph>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.credit.is_empty()
            && self.author.is_empty()
            && self.draft_date.is_empty()
            && self.data.is_empty()
            && self.body.is_empty()
    }
}
