use crate::normalize::stringify;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 类名片段：一个或多个以空格分隔的 CSS 类名，不做任何解析
pub type ClassFragment = String;

/// 单个变体的取值表：变体值 → 类名片段
pub type VariantValues = IndexMap<String, ClassFragment>;

/// 变体表：变体名 → 取值表（保持声明顺序）
pub type VariantSchema = IndexMap<String, VariantValues>;

/// 默认选择：变体名 → 默认值
pub type DefaultSelection = IndexMap<String, Value>;

/// 调用时传入的标量值
///
/// 对应 JS 侧的 string / boolean / number / null；整数与浮点数分开保存。
/// 数组和对象不是合法的值，反序列化时直接报错。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    /// 整数单独保存，避免超过 2^53 时经 f64 丢失精度
    Int(i64),
    Number(f64),
    String(String),
}

impl Value {
    /// 字符串化后是否为空（null 与 "" 都视为空）
    pub fn is_empty(&self) -> bool {
        stringify(self).is_empty()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify(self))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n.into())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// 组合规则中单个变体的匹配条件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Condition {
    /// 必须等于该值
    Is(Value),
    /// 必须属于其中之一
    AnyOf(Vec<Value>),
}

impl Condition {
    /// 按字符串化后的形式比较，`true` 与 `"true"` 视为相同
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            Condition::Is(expected) => stringify(expected) == actual,
            Condition::AnyOf(allowed) => allowed.iter().any(|v| stringify(v) == actual),
        }
    }
}

/// 组合规则：所有条件都满足时追加 `class`
///
/// JSON 形式为扁平对象，`class` 是保留键，其余键都是条件：
///
/// ```json
/// { "size": "sm", "type": ["primary", "danger"], "class": "uppercase" }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompoundRule {
    #[serde(default, deserialize_with = "null_as_default")]
    pub class: ClassFragment,
    #[serde(flatten)]
    pub conditions: IndexMap<String, Condition>,
}

impl CompoundRule {
    pub fn new(class: impl Into<ClassFragment>) -> Self {
        Self {
            class: class.into(),
            conditions: IndexMap::new(),
        }
    }

    /// 添加等值条件
    pub fn when(mut self, variant: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions
            .insert(variant.into(), Condition::Is(value.into()));
        self
    }

    /// 添加集合条件
    pub fn when_any<I, V>(mut self, variant: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let allowed = values.into_iter().map(Into::into).collect();
        self.conditions
            .insert(variant.into(), Condition::AnyOf(allowed));
        self
    }

    /// 对（已填充默认值的）选择做合取匹配
    ///
    /// 没有条件的规则总是匹配；选择中缺失的键按 null 处理。
    /// `class` 是保留键，即使出现在条件里也不参与匹配。
    pub fn matches(&self, selection: &Selection) -> bool {
        self.conditions
            .iter()
            .filter(|(variant, _)| variant.as_str() != "class")
            .all(|(variant, condition)| {
                let actual = selection.get(variant).map(stringify).unwrap_or_default();
                condition.matches(&actual)
            })
    }
}

/// 调用时的变体选择
///
/// `class` 是保留键，内容原样追加到结果末尾，不参与变体匹配。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<Value>,
    #[serde(flatten)]
    pub values: IndexMap<String, Value>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置变体值；名为 `class` 时等同于 [`Selection::with_class`]
    pub fn with(mut self, variant: impl Into<String>, value: impl Into<Value>) -> Self {
        let variant = variant.into();
        if variant == "class" {
            self.class = Some(value.into());
        } else {
            self.values.insert(variant, value.into());
        }
        self
    }

    pub fn with_class(mut self, class: impl Into<Value>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn get(&self, variant: &str) -> Option<&Value> {
        self.values.get(variant)
    }
}

/// 构造配置
///
/// 所有字段都可缺省；JSON 键名为 camelCase（`defaultVariants`、`compoundVariants`）。
/// `variants` 缺省（`None`）与空表（`Some({})`）语义不同：
/// 前者只输出 base + class，后者仍会应用组合规则。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CvaConfig {
    #[serde(deserialize_with = "deserialize_base")]
    pub base: Vec<ClassFragment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<VariantSchema>,
    #[serde(deserialize_with = "null_as_default")]
    pub default_variants: DefaultSelection,
    #[serde(deserialize_with = "null_as_default")]
    pub compound_variants: Vec<CompoundRule>,
}

// 可选字段显式传 null 时按缺省处理
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BaseInput {
    One(ClassFragment),
    Many(Vec<ClassFragment>),
}

// base 既可以是单个字符串，也可以是字符串数组
fn deserialize_base<'de, D>(deserializer: D) -> Result<Vec<ClassFragment>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<BaseInput>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(BaseInput::One(class)) => vec![class],
        Some(BaseInput::Many(classes)) => classes,
    })
}

/// 诊断信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Warning,
    Error,
}
