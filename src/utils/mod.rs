pub mod fountain_constants;

pub use fountain_constants::{FountainConstants, PROSE_CHARS};

/// 检查一行文本是否为角色名行
///
/// 行内不含小写字母，也不含 `* _ ( ) [ ]` 时视为角色名；
/// 数字和其余标点不影响判断。调用方负责确认该行以换行结束。
pub fn is_speaker_line(line: &str) -> bool {
    !line.is_empty() && !PROSE_CHARS.is_match(line)
}

/// 换行串是否为软换行（单个换行）
pub fn is_soft_break(value: &str) -> bool {
    value == FountainConstants::SOFT_BREAK
}
