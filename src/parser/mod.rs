pub mod lexer;
pub mod fountain_parser;
pub mod text_processor;

pub use lexer::{Lexer, tokenize};
pub use fountain_parser::FountainParser;
pub use fountain_parser::ParseOutput;
pub use text_processor::{StyleState, apply_inline_token};
