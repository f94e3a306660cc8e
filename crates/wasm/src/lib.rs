use serde::Serialize;
use wasm_bindgen::prelude::*;

use cva_core::{Cva as CoreCva, CvaConfig, Selection};

// ── 输入/输出转换 ─────────────────────────────────────────────

fn parse_config(config: JsValue) -> Result<CvaConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        Ok(CvaConfig::default())
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))
    }
}

fn parse_selection(props: JsValue) -> Result<Selection, JsError> {
    if props.is_undefined() || props.is_null() {
        Ok(Selection::new())
    } else {
        serde_wasm_bindgen::from_value(props)
            .map_err(|e| JsError::new(&format!("Invalid selection: {}", e)))
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ── WASM 导出 ─────────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 变体解析器
///
/// ```js
/// const button = new Cva({
///   base: ["button"],
///   variants: { size: { sm: "text-sm", lg: "text-lg" } },
///   defaultVariants: { size: "sm" },
/// });
/// button.resolve({ size: "lg", class: "mt-2" }); // "button text-lg mt-2"
/// ```
#[wasm_bindgen(js_name = "Cva")]
pub struct JsCva {
    inner: CoreCva,
}

#[wasm_bindgen(js_class = "Cva")]
impl JsCva {
    /// @param config - `{ base, variants, defaultVariants, compoundVariants }`，可选
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsCva, JsError> {
        let config = parse_config(config)?;
        Ok(JsCva {
            inner: CoreCva::new(config),
        })
    }

    /// 计算类名
    ///
    /// @param props - 变体选择，可包含保留键 `class`，可选
    pub fn resolve(&self, props: JsValue) -> Result<String, JsError> {
        let selection = parse_selection(props)?;
        Ok(self.inner.resolve(&selection))
    }

    /// 所有变体组合，返回普通对象数组
    pub fn combinations(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.combinations())
    }

    /// 配置检查结果 `{ level, message }[]`
    pub fn diagnostics(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.diagnostics())
    }
}
