use lazy_static::lazy_static;
use regex::Regex;

pub struct FountainConstants;

impl FountainConstants {
    // 标题页中有专属字段的键
    pub const KEY_TITLE: &'static str = "Title";
    pub const KEY_CREDIT: &'static str = "Credit";
    pub const KEY_AUTHOR: &'static str = "Author";
    pub const KEY_DRAFT_DATE: &'static str = "Draft Date";

    /// 软换行：段落内的单个换行
    pub const SOFT_BREAK: &'static str = "\n";

    /// 标题页键值分隔之后需要跳过的字符
    pub const DATA_SEPARATORS: &'static [char] = &[':', ' '];
}

lazy_static! {
    // 出现任一字符即为普通文本行：小写字母或标记符号 * _ ( ) [ ]
    pub static ref PROSE_CHARS: Regex = Regex::new(r"[\p{Ll}*_()\[\]]").unwrap();
}
