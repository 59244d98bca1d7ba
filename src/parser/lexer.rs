use std::iter::FusedIterator;
use log::{debug, trace};
use crate::models::{Token, TokenType};
use crate::utils::{is_speaker_line, FountainConstants};

/// 文本累积模式：动作行产出 Text，对白行产出 Dialogue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextMode {
    Action,
    Dialogue,
}

impl TextMode {
    fn token_type(self) -> TokenType {
        match self {
            TextMode::Action => TokenType::Text,
            TextMode::Dialogue => TokenType::Dialogue,
        }
    }

    // 遇到换行后回到的状态
    fn line_end_state(self) -> LexState {
        match self {
            TextMode::Action => LexState::Body,
            TextMode::Dialogue => LexState::Dialogue,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    DataBlock,
    DataValue,
    Body,
    Text(TextMode),
    Delimiter(TextMode),
    Dialogue,
    Parenthetical,
    Done,
}

/// 词法分析器
///
/// 按需逐个产出token，内部不缓存任何token：每次调用 `next` 只推进状态机
/// 直到产出下一个token为止。输入结束时先输出已累积的文本，再结束迭代。
pub struct Lexer<'a> {
    src: &'a str,
    /// 当前token的起始字节位置
    start: usize,
    pos: usize,
    start_line: usize,
    line: usize,
    state: LexState,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Lexer {
            src,
            start: 0,
            pos: 0,
            start_line: 1,
            line: 1,
            state: LexState::DataBlock,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.src[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn accept(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.next_char();
            true
        } else {
            false
        }
    }

    fn accept_run(&mut self, set: &[char]) {
        while let Some(c) = self.peek() {
            if !set.contains(&c) {
                break;
            }
            self.next_char();
        }
    }

    /// 跳过至指定字符（或换行/结尾）之前
    fn skip_until(&mut self, stops: &[char]) {
        while let Some(c) = self.peek() {
            if c == '\n' || stops.contains(&c) {
                break;
            }
            self.next_char();
        }
    }

    fn ignore(&mut self) {
        self.start = self.pos;
        self.start_line = self.line;
    }

    fn emit(&mut self, token_type: TokenType) -> Token {
        let token = Token::new(
            token_type,
            self.src[self.start..self.pos].to_string(),
            self.start_line,
            self.start,
        );
        trace!("token {:?} {:?} (行 {})", token.token_type, token.value, token.line);
        self.ignore();
        token
    }

    /// 从当前位置到行尾（不含换行）的文本
    fn rest_of_line(&self) -> &'a str {
        let src: &'a str = self.src;
        let rest = &src[self.pos..];
        match rest.find('\n') {
            Some(i) => &rest[..i],
            None => rest,
        }
    }

    fn at_delimiter(&self, c: char) -> bool {
        match c {
            '*' | '_' => true,
            '[' | ']' => self.peek_second() == Some(c),
            _ => false,
        }
    }

    fn lex_data_block(&mut self) -> Option<Token> {
        match self.peek() {
            None => self.state = LexState::Done,
            Some('\n') => {
                self.accept_run(&['\n']);
                self.ignore();
                self.state = LexState::Body;
            }
            Some(_) => {
                if !self.rest_of_line().contains(':') {
                    debug!("第 {} 行不是键值行，标题页结束", self.line);
                    self.state = LexState::Body;
                    return None;
                }
                self.skip_until(&[':']);
                let token = self.emit(TokenType::DataKey);
                self.accept_run(FountainConstants::DATA_SEPARATORS);
                self.ignore();
                self.state = LexState::DataValue;
                return Some(token);
            }
        }
        None
    }

    fn lex_data_value(&mut self) -> Option<Token> {
        self.skip_until(&[]);
        let token = self.emit(TokenType::DataValue);
        self.accept('\n');
        self.ignore();
        self.state = LexState::DataBlock;
        Some(token)
    }

    fn lex_body(&mut self) -> Option<Token> {
        match self.peek() {
            None => {
                self.state = LexState::Done;
                None
            }
            Some(' ') => {
                self.accept_run(&[' ']);
                Some(self.emit(TokenType::Indent))
            }
            Some('\n') => {
                self.accept_run(&['\n']);
                Some(self.emit(TokenType::ParagraphBreak))
            }
            Some(_) => {
                let line = self.rest_of_line();
                // 角色名行必须以换行结束
                let terminated = self.pos + line.len() < self.src.len();
                if terminated && is_speaker_line(line) {
                    self.pos += line.len();
                    self.state = LexState::Dialogue;
                    return Some(self.emit(TokenType::Speaker));
                }
                self.state = LexState::Text(TextMode::Action);
                None
            }
        }
    }

    fn lex_text(&mut self, mode: TextMode) -> Option<Token> {
        loop {
            match self.peek() {
                None => {
                    self.state = LexState::Done;
                    break;
                }
                Some('\n') => {
                    self.state = mode.line_end_state();
                    break;
                }
                Some(c) if self.at_delimiter(c) => {
                    self.state = LexState::Delimiter(mode);
                    break;
                }
                Some(_) => {
                    self.next_char();
                }
            }
        }
        Some(self.emit(mode.token_type()))
    }

    fn lex_delimiter(&mut self, mode: TextMode) -> Option<Token> {
        self.state = LexState::Text(mode);
        let token_type = match self.next_char()? {
            '*' => {
                if self.accept('*') {
                    TokenType::StarDouble
                } else {
                    TokenType::Star
                }
            }
            '_' => TokenType::Underscore,
            '[' => {
                self.accept('[');
                TokenType::CommentOpen
            }
            ']' => {
                self.accept(']');
                TokenType::CommentClose
            }
            // 非分隔符，留给文本状态继续累积
            _ => return None,
        };
        Some(self.emit(token_type))
    }

    fn lex_dialogue(&mut self) -> Option<Token> {
        match self.peek() {
            None => self.state = LexState::Done,
            Some('\n') => match self.peek_second() {
                // 空行或结尾：对白块结束，交给正文状态输出换行
                None | Some('\n') => self.state = LexState::Body,
                Some(_) => {
                    self.next_char();
                    self.ignore();
                }
            },
            Some('(') => self.state = LexState::Parenthetical,
            Some(_) => self.state = LexState::Text(TextMode::Dialogue),
        }
        None
    }

    fn lex_parenthetical(&mut self) -> Option<Token> {
        self.accept('(');
        self.ignore();
        self.skip_until(&[')']);
        let token = self.emit(TokenType::Parenthetical);
        self.accept(')');
        self.ignore();
        self.state = LexState::Dialogue;
        Some(token)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let token = match self.state {
                LexState::Done => return None,
                LexState::DataBlock => self.lex_data_block(),
                LexState::DataValue => self.lex_data_value(),
                LexState::Body => self.lex_body(),
                LexState::Text(mode) => self.lex_text(mode),
                LexState::Delimiter(mode) => self.lex_delimiter(mode),
                LexState::Dialogue => self.lex_dialogue(),
                LexState::Parenthetical => self.lex_parenthetical(),
            };
            if token.is_some() {
                return token;
            }
        }
    }
}

impl<'a> FusedIterator for Lexer<'a> {}

/// 对剧本文本做词法分析
pub fn tokenize(src: &str) -> Lexer<'_> {
    Lexer::new(src)
}
