use crate::models::{Chunk, Style, Token, TokenType};

/// 当前生效的行内样式
///
/// `*` `**` `_` 只做开关切换，不检查是否成对；`[[` `]]` 分别打开、关闭注释。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleState {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub comment: bool,
}

impl StyleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按分隔符切换样式，非样式token原样返回
    pub fn apply(self, token_type: TokenType) -> Self {
        let mut next = self;
        match token_type {
            TokenType::StarDouble => next.bold = !next.bold,
            TokenType::Star => next.italic = !next.italic,
            TokenType::Underscore => next.underline = !next.underline,
            TokenType::CommentOpen => next.comment = true,
            TokenType::CommentClose => next.comment = false,
            _ => {}
        }
        next
    }

    // 固定顺序输出，与切换顺序无关
    pub fn styles(&self) -> Vec<Style> {
        [
            (self.bold, Style::Bold),
            (self.italic, Style::Italic),
            (self.underline, Style::Underline),
            (self.comment, Style::Comment),
        ]
        .into_iter()
        .filter_map(|(on, style)| on.then_some(style))
        .collect()
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// 将一个行内token应用到当前行
///
/// 样式分隔符只改变状态；其余token的文本以当前样式追加为一个片段。
pub fn apply_inline_token(token: Token, state: StyleState, chunks: &mut Vec<Chunk>) -> StyleState {
    if token.token_type.is_inline_marker() {
        return state.apply(token.token_type);
    }
    chunks.push(Chunk::new(token.value, state.styles()));
    state
}
