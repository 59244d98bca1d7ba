use std::iter::Peekable;
use std::time::Instant;
use log::debug;
use crate::models::{
    Chunk,
    Conf,
    Document,
    Line,
    LineType,
    Paragraph,
    ParagraphType,
    ScreenplayProperties,
    Token,
    TokenType,
};
use crate::parser::lexer::tokenize;
use crate::parser::text_processor::{apply_inline_token, StyleState};
use crate::utils::{is_soft_break, FountainConstants};

#[derive(Debug, Clone, serde::Serialize)]
pub struct ParseOutput {
    pub document: Document,
    pub properties: ScreenplayProperties,
    /// 解析器实际读取的token数量
    pub token_count: usize,
    /// 解析耗时(毫秒)
    pub parse_time: u64,
}

impl ParseOutput {
    pub fn new() -> Self {
        ParseOutput {
            document: Document::new(),
            properties: ScreenplayProperties::new(),
            token_count: 0,
            parse_time: 0,
        }
    }
}

impl Default for ParseOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// 带一个token预读的输入流
struct TokenStream<I: Iterator<Item = Token>> {
    tokens: Peekable<I>,
    consumed: usize,
}

impl<I: Iterator<Item = Token>> TokenStream<I> {
    fn new(tokens: I) -> Self {
        TokenStream {
            tokens: tokens.peekable(),
            consumed: 0,
        }
    }

    fn peek_type(&mut self) -> Option<TokenType> {
        self.tokens.peek().map(|t| t.token_type)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.next();
        if token.is_some() {
            self.consumed += 1;
        }
        token
    }

    /// 下一个token类型匹配时才读取
    fn accept(&mut self, token_type: TokenType) -> Option<Token> {
        if self.peek_type() == Some(token_type) {
            self.next()
        } else {
            None
        }
    }

    /// 下一个token不属于 `stops` 时才读取
    fn next_unless(&mut self, stops: &[TokenType]) -> Option<Token> {
        let stop = match self.tokens.peek() {
            Some(token) => token.is_type(stops),
            None => true,
        };
        if stop {
            None
        } else {
            self.next()
        }
    }
}

fn flush_line(lines: &mut Vec<Line>, chunks: &mut Vec<Chunk>, line_type: LineType) {
    if !chunks.is_empty() {
        lines.push(Line::new(line_type, std::mem::take(chunks)));
    }
}

pub struct FountainParser {
    carry_styles: bool,
}

impl FountainParser {
    pub fn new() -> Self {
        FountainParser { carry_styles: true }
    }

    /// 解析剧本文本
    ///
    /// 不会失败：格式不完整时返回已解析的部分。
    pub fn parse(&mut self, script: &str, config: &Conf) -> ParseOutput {
        let started = Instant::now();
        self.carry_styles = config.carry_styles_across_soft_break;

        let mut tokens = TokenStream::new(tokenize(script));
        let document = self.parse_stream(&mut tokens);

        let properties = if config.collect_properties {
            ScreenplayProperties::from_document(&document)
        } else {
            ScreenplayProperties::new()
        };

        ParseOutput {
            document,
            properties,
            token_count: tokens.consumed,
            parse_time: started.elapsed().as_millis() as u64,
        }
    }

    /// 直接从token序列构建文档
    pub fn parse_tokens<I: IntoIterator<Item = Token>>(&self, tokens: I) -> Document {
        let mut tokens = TokenStream::new(tokens.into_iter());
        self.parse_stream(&mut tokens)
    }

    fn parse_stream<I: Iterator<Item = Token>>(&self, tokens: &mut TokenStream<I>) -> Document {
        let mut doc = Document::new();
        self.parse_title_block(tokens, &mut doc);
        debug!("标题页解析完成: title={:?}, 其他键 {} 个", doc.title, doc.data.len());
        self.parse_body(tokens, &mut doc);
        debug!("正文解析完成: {} 个段落", doc.body.len());
        doc
    }

    fn parse_title_block<I: Iterator<Item = Token>>(&self, tokens: &mut TokenStream<I>, doc: &mut Document) {
        while let Some(key) = tokens.accept(TokenType::DataKey) {
            let Some(value) = tokens.accept(TokenType::DataValue) else {
                debug!("标题页键 {:?} 缺少值，停止解析标题页", key.value);
                break;
            };

            match key.value.as_str() {
                FountainConstants::KEY_TITLE => doc.title = value.value,
                FountainConstants::KEY_CREDIT => doc.credit = value.value,
                FountainConstants::KEY_AUTHOR => doc.author = value.value,
                FountainConstants::KEY_DRAFT_DATE => doc.draft_date = value.value,
                _ => {
                    doc.data.insert(key.value, value.value);
                }
            }
        }
    }

    fn parse_body<I: Iterator<Item = Token>>(&self, tokens: &mut TokenStream<I>, doc: &mut Document) {
        loop {
            let indent = tokens.accept(TokenType::Indent);
            match tokens.peek_type() {
                None => break,
                // 段落之间多余的换行（例如只含空格的行之后）
                Some(TokenType::ParagraphBreak) => {
                    tokens.next();
                }
                Some(TokenType::Speaker) => {
                    let paragraph = self.parse_dialogue(tokens);
                    doc.body.push(paragraph);
                }
                Some(_) => {
                    if let Some(paragraph) = self.parse_action(tokens, indent) {
                        doc.body.push(paragraph);
                    }
                }
            }
        }
    }

    fn parse_action<I: Iterator<Item = Token>>(
        &self,
        tokens: &mut TokenStream<I>,
        indent: Option<Token>,
    ) -> Option<Paragraph> {
        let mut lines = Vec::new();
        let mut chunks = Vec::new();
        let mut state = StyleState::new();

        if let Some(indent) = indent {
            state = apply_inline_token(indent, state, &mut chunks);
        }

        while let Some(token) = tokens.next() {
            match token.token_type {
                TokenType::ParagraphBreak => {
                    if !is_soft_break(&token.value) {
                        break;
                    }
                    flush_line(&mut lines, &mut chunks, LineType::Action);
                    if !self.carry_styles {
                        state = StyleState::new();
                    }
                }
                // 动作段落中紧跟的大写行，单独成行
                TokenType::Speaker => {
                    flush_line(&mut lines, &mut chunks, LineType::Action);
                    let chunk = Chunk::new(token.value, state.styles());
                    lines.push(Line::new(LineType::Action, vec![chunk]));
                }
                TokenType::Parenthetical => {
                    flush_line(&mut lines, &mut chunks, LineType::Action);
                    let chunk = Chunk::new(format!("({})", token.value), state.styles());
                    lines.push(Line::new(LineType::Action, vec![chunk]));
                }
                _ => state = apply_inline_token(token, state, &mut chunks),
            }
        }
        flush_line(&mut lines, &mut chunks, LineType::Action);

        if lines.is_empty() {
            return None;
        }
        debug!("动作段落: {} 行", lines.len());
        Some(Paragraph::new(ParagraphType::Action, lines))
    }

    fn parse_dialogue<I: Iterator<Item = Token>>(&self, tokens: &mut TokenStream<I>) -> Paragraph {
        let mut lines = Vec::new();
        if let Some(speaker) = tokens.accept(TokenType::Speaker) {
            lines.push(Line::new(LineType::Speaker, vec![Chunk::plain(speaker.value)]));
        }

        let mut state = StyleState::new();
        loop {
            match tokens.peek_type() {
                None => break,
                Some(TokenType::ParagraphBreak) => {
                    tokens.next();
                    break;
                }
                // 新的角色名只会出现在换行之后，这里留给外层开启新段落
                Some(TokenType::Speaker) => break,
                Some(TokenType::Parenthetical) => {
                    if let Some(token) = tokens.next() {
                        lines.push(Line::new(LineType::Parenthetical, vec![Chunk::plain(token.value)]));
                    }
                }
                Some(_) => {
                    if !self.carry_styles {
                        state = StyleState::new();
                    }
                    let mut chunks = Vec::new();
                    while let Some(token) = tokens.next_unless(&[
                        TokenType::Speaker,
                        TokenType::Parenthetical,
                        TokenType::ParagraphBreak,
                    ]) {
                        state = apply_inline_token(token, state, &mut chunks);
                    }
                    flush_line(&mut lines, &mut chunks, LineType::Dialogue);
                }
            }
        }

        debug!("对白段落: {} 行", lines.len());
        Paragraph::new(ParagraphType::Dialogue, lines)
    }
}

impl Default for FountainParser {
    fn default() -> Self {
        Self::new()
    }
}
