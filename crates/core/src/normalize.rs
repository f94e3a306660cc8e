use crate::types::Value;
use std::borrow::Cow;

/// 将值转换为类名字符串
///
/// - null → ""
/// - 布尔 → "true" / "false"
/// - 数字 0（包括 -0）→ "0"
/// - 绝对值 ≥ 1e21 或 < 1e-6 的浮点数 → 指数形式（"1e+21"、"1.5e-7"）
/// - 其他 → 自然字符串形式
pub fn stringify(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::Bool(true) => Cow::Borrowed("true"),
        Value::Bool(false) => Cow::Borrowed("false"),
        Value::Int(n) => Cow::Owned(n.to_string()),
        Value::Number(n) => Cow::Owned(format_number(*n)),
        Value::String(s) => Cow::Borrowed(s.as_str()),
    }
}

fn format_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    } else {
        // f64 的 Display 对整数值不带小数点：2.0 → "2"
        n.to_string()
    }
}

/// 规范化类名片段并拼接
///
/// 功能：
/// 1. 去除每个片段首尾空白
/// 2. 丢弃空片段
/// 3. 用单个空格连接
///
/// 片段内部内容保持原样。
pub fn normalize_classes<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();

    for fragment in fragments {
        let trimmed = fragment.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(trimmed);
    }

    result
}
