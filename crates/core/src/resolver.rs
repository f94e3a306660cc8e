use crate::error::Result;
use crate::loader::load_config_from_json;
use crate::normalize::{normalize_classes, stringify};
use crate::types::{
    ClassFragment, CompoundRule, CvaConfig, DefaultSelection, Diagnostic, Selection, Value,
    VariantSchema,
};
use indexmap::IndexMap;
use std::borrow::Cow;
use tracing::{debug, trace};

/// 变体解析器
///
/// 构造后配置不可变；`resolve` 与 `combinations` 都是纯函数，
/// 可以在多个线程间共享同一个实例。
///
/// # 示例
///
/// ```
/// use cva_core::{Cva, Selection};
///
/// let button = Cva::builder()
///     .base("button")
///     .variant("size", [("sm", "text-sm"), ("lg", "text-lg")])
///     .default_variant("size", "sm")
///     .build();
///
/// assert_eq!(button.resolve(&Selection::new()), "button text-sm");
/// assert_eq!(button.resolve(&Selection::new().with("size", "lg")), "button text-lg");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Cva {
    config: CvaConfig,
}

impl Cva {
    pub fn new(config: CvaConfig) -> Self {
        debug!(
            has_schema = config.variants.is_some(),
            variants = config.variants.as_ref().map_or(0, |v| v.len()),
            compound_variants = config.compound_variants.len(),
            "variant resolver constructed"
        );
        Self { config }
    }

    pub fn builder() -> CvaBuilder {
        CvaBuilder::default()
    }

    /// 从 JSON 配置构造
    pub fn from_json(json_str: &str) -> Result<Self> {
        load_config_from_json(json_str).map(Self::new)
    }

    pub fn config(&self) -> &CvaConfig {
        &self.config
    }

    pub fn base(&self) -> &[ClassFragment] {
        &self.config.base
    }

    pub fn variants(&self) -> Option<&VariantSchema> {
        self.config.variants.as_ref()
    }

    pub fn default_variants(&self) -> &DefaultSelection {
        &self.config.default_variants
    }

    pub fn compound_variants(&self) -> &[CompoundRule] {
        &self.config.compound_variants
    }

    /// 计算最终类名
    ///
    /// 输出顺序：base → 变体类（按变体声明顺序）→ 组合规则类（按规则顺序）→ `class`。
    /// 未知的变体名或变体值不会报错，只是不贡献类名。
    pub fn resolve(&self, selection: &Selection) -> String {
        let mut fragments: Vec<Cow<'_, str>> = self
            .config
            .base
            .iter()
            .map(|class| Cow::Borrowed(class.as_str()))
            .collect();

        // 未配置变体表时只拼接 base 与 class
        if let Some(schema) = &self.config.variants {
            let effective = self.effective_selection(selection);
            fragments.extend(
                Self::variant_classes(schema, &effective)
                    .into_iter()
                    .map(Cow::Borrowed),
            );
            fragments.extend(
                self.compound_classes(&effective)
                    .into_iter()
                    .map(Cow::Borrowed),
            );
        }

        if let Some(class) = &selection.class {
            fragments.push(stringify(class));
        }

        normalize_classes(fragments)
    }

    /// 用默认值填充缺失（或字符串化为空）的键
    pub fn effective_selection(&self, selection: &Selection) -> Selection {
        let mut effective = selection.clone();

        for (variant, default) in &self.config.default_variants {
            let missing = effective.get(variant).map_or(true, Value::is_empty);
            if missing {
                effective.values.insert(variant.clone(), default.clone());
            }
        }

        effective
    }

    fn variant_classes<'a>(schema: &'a VariantSchema, effective: &Selection) -> Vec<&'a str> {
        schema
            .iter()
            .filter_map(|(variant, values)| {
                let value = stringify(effective.get(variant)?);
                if value.is_empty() {
                    return None;
                }
                match values.get(&*value) {
                    Some(class) => Some(class.as_str()),
                    None => {
                        trace!(variant = %variant, value = %value, "no class declared for variant value");
                        None
                    }
                }
            })
            .collect()
    }

    fn compound_classes(&self, effective: &Selection) -> Vec<&str> {
        self.config
            .compound_variants
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.matches(effective))
            .map(|(index, rule)| {
                trace!(index, "compound rule matched");
                rule.class.as_str()
            })
            .collect()
    }

    /// 检查配置中的交叉引用
    ///
    /// 只用于提示，`resolve` 的宽松行为不受影响。
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let empty = VariantSchema::new();
        let schema = self.config.variants.as_ref().unwrap_or(&empty);

        for (variant, values) in schema {
            // 没有值的变体会让 combinations() 返回空列表
            if values.is_empty() {
                diagnostics.push(Diagnostic::error(format!(
                    "Variant '{}' declares no values",
                    variant
                )));
            }
        }

        for (variant, default) in &self.config.default_variants {
            match schema.get(variant) {
                None => diagnostics.push(Diagnostic::warning(format!(
                    "Default for unknown variant: {}",
                    variant
                ))),
                Some(values) => {
                    let value = stringify(default);
                    if !value.is_empty() && !values.contains_key(&*value) {
                        diagnostics.push(Diagnostic::warning(format!(
                            "Default value '{}' is not declared for variant '{}'",
                            value, variant
                        )));
                    }
                }
            }
        }

        for (index, rule) in self.config.compound_variants.iter().enumerate() {
            for variant in rule.conditions.keys() {
                if variant != "class" && !schema.contains_key(variant) {
                    diagnostics.push(Diagnostic::warning(format!(
                        "Compound rule #{} references unknown variant: {}",
                        index, variant
                    )));
                }
            }
            if rule.class.trim().is_empty() {
                diagnostics.push(Diagnostic::warning(format!(
                    "Compound rule #{} has an empty class",
                    index
                )));
            }
        }

        diagnostics
    }
}

/// `Cva` 的构建器
///
/// 不调用 [`CvaBuilder::variant`] 时得到的解析器没有变体表，组合规则也不会生效。
#[derive(Debug, Clone, Default)]
pub struct CvaBuilder {
    config: CvaConfig,
}

impl CvaBuilder {
    pub fn base(mut self, class: impl Into<ClassFragment>) -> Self {
        self.config.base.push(class.into());
        self
    }

    pub fn variant<N, I, K, C>(mut self, name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (K, C)>,
        K: Into<String>,
        C: Into<ClassFragment>,
    {
        let values = values
            .into_iter()
            .map(|(value, class)| (value.into(), class.into()))
            .collect();
        self.config
            .variants
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), values);
        self
    }

    pub fn default_variant(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config
            .default_variants
            .insert(name.into(), value.into());
        self
    }

    pub fn compound(mut self, rule: CompoundRule) -> Self {
        self.config.compound_variants.push(rule);
        self
    }

    pub fn build(self) -> Cva {
        Cva::new(self.config)
    }
}
