use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// 软换行（同一段落内换行）后是否保留粗体/斜体/下划线/注释状态
    pub carry_styles_across_soft_break: bool,
    /// 是否统计角色、段落数等信息
    pub collect_properties: bool,
    /// 输出JSON时是否格式化
    pub pretty_json: bool,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            carry_styles_across_soft_break: true,
            collect_properties: true,
            pretty_json: true,
        }
    }
}
