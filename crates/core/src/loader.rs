use crate::error::{CvaError, Result};
use crate::types::{CvaConfig, Selection};

/// 从 JSON 字符串加载配置
///
/// JSON 格式示例：
/// ```json
/// {
///   "base": ["button", "font-semibold"],
///   "variants": {
///     "size": { "sm": "text-sm px-2 py-1", "lg": "text-lg px-4 py-2" }
///   },
///   "defaultVariants": { "size": "sm" },
///   "compoundVariants": [
///     { "size": "lg", "class": "uppercase" }
///   ]
/// }
/// ```
pub fn load_config_from_json(json_str: &str) -> Result<CvaConfig> {
    serde_json::from_str(json_str).map_err(CvaError::InvalidConfig)
}

/// 从 JSON 字符串加载一次调用的选择（如 `{"size": "lg", "class": "mt-2"}`）
///
/// 值只能是标量，数组或对象会被拒绝。
pub fn load_selection_from_json(json_str: &str) -> Result<Selection> {
    serde_json::from_str(json_str).map_err(CvaError::InvalidSelection)
}
