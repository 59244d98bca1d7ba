use serde::{Deserialize, Serialize};

/// 词法单元类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    DataKey,
    DataValue,
    /// 换行串，值为原始的换行字符（"\n" 为软换行，更长为硬换行）
    ParagraphBreak,
    Text,
    /// 单个 `*`
    Star,
    /// `**`
    StarDouble,
    Underscore,
    /// 行首空格
    Indent,
    Speaker,
    Dialogue,
    Parenthetical,
    /// `[[`
    CommentOpen,
    /// `]]`
    CommentClose,
}

impl TokenType {
    /// 是否为行内样式标记（`*` `**` `_` `[[` `]]`）
    pub fn is_inline_marker(&self) -> bool {
        matches!(
            self,
            TokenType::Star
                | TokenType::StarDouble
                | TokenType::Underscore
                | TokenType::CommentOpen
                | TokenType::CommentClose
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub token_type: TokenType, // token类型
    pub value: String,         // 对应的原始文本
    pub line: usize,           // 所在行号(从1开始)
    pub start: usize,          // 起始字节位置
}

impl Token {
    pub fn new(token_type: TokenType, value: String, line: usize, start: usize) -> Self {
        Token {
            token_type,
            value,
            line,
            start,
        }
    }

    // 检查token类型是否匹配
    pub fn is_type(&self, types: &[TokenType]) -> bool {
        types.contains(&self.token_type)
    }
}
