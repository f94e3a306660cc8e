use crate::resolver::Cva;
use crate::types::{Selection, VariantSchema};

/// 枚举变体表的笛卡尔积
///
/// 从一个空组合开始，按变体声明顺序依次展开：每个已有组合 × 当前变体的每个值。
/// 因此越靠后的变体变化越快。
///
/// - 没有变体表或变体表为空 → 返回一个空选择
/// - 任一变体没有声明值 → 返回空列表
///
/// 不应用默认值和组合规则，只描述输入空间。
pub fn enumerate_combinations(schema: Option<&VariantSchema>) -> Vec<Selection> {
    let mut combinations = vec![Selection::new()];

    let Some(schema) = schema else {
        return combinations;
    };

    for (variant, values) in schema {
        let mut next = Vec::with_capacity(combinations.len() * values.len());
        for partial in &combinations {
            for value in values.keys() {
                next.push(partial.clone().with(variant.as_str(), value.as_str()));
            }
        }
        combinations = next;
    }

    combinations
}

impl Cva {
    /// 所有可能的变体组合
    pub fn combinations(&self) -> Vec<Selection> {
        enumerate_combinations(self.variants())
    }

    /// 每个组合及其解析结果
    pub fn resolve_combinations(&self) -> Vec<(Selection, String)> {
        self.combinations()
            .into_iter()
            .map(|selection| {
                let class = self.resolve(&selection);
                (selection, class)
            })
            .collect()
    }
}
