pub mod document;
pub mod token;
pub mod screenplay_properties;
pub mod conf;

pub use document::{Document, Paragraph, ParagraphType, Line, LineType, Chunk, Style};
pub use token::{Token, TokenType};
pub use screenplay_properties::ScreenplayProperties;
pub use conf::Conf;
