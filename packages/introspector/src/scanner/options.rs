// Scanner Options
//
// Selects which declarations of a module count as enums, loadable from a JSON file.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Controls which declarations of a module are treated as enums.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScannerOptions {
    /// Decorator marking a class as an enum, without the `@`.
    pub enum_decorator: String,
    /// Whether TypeScript `enum` declarations are extracted too.
    pub include_ts_enums: bool,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            enum_decorator: "enumType".to_string(),
            include_ts_enums: true,
        }
    }
}

impl ScannerOptions {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let options: ScannerOptions = serde_json::from_str(&content)?;
        Ok(options)
    }
}
