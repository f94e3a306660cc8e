pub mod combinations;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod resolver;
pub mod types;

// Re-export commonly used types
pub use combinations::enumerate_combinations;
pub use error::{CvaError, Result};
pub use loader::{load_config_from_json, load_selection_from_json};
pub use normalize::{normalize_classes, stringify};
pub use resolver::{Cva, CvaBuilder};
pub use types::{
    ClassFragment, CompoundRule, Condition, CvaConfig, DefaultSelection, Diagnostic,
    DiagnosticLevel, Selection, Value, VariantSchema, VariantValues,
};
