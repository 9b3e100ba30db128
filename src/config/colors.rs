use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::constants::{DEFAULT_LABEL_COLOR, LABEL_COLORS};
use crate::error::{ProvisionError, ProvisionResult};

/// Label name to 6-hex-digit color, with a fallback for unmapped names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelColorTable {
    colors: HashMap<String, String>,
    default_color: String,
}

impl Default for LabelColorTable {
    fn default() -> Self {
        let colors = LABEL_COLORS
            .iter()
            .map(|(name, color)| (name.to_string(), color.to_string()))
            .collect();

        Self {
            colors,
            default_color: DEFAULT_LABEL_COLOR.to_string(),
        }
    }
}

impl LabelColorTable {
    pub fn color_for(&self, name: &str) -> &str {
        self.colors
            .get(name)
            .map(String::as_str)
            .unwrap_or(&self.default_color)
    }

    pub fn default_color(&self) -> &str {
        &self.default_color
    }

    pub fn is_mapped(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    /// Merge user-supplied colors over the built-in table
    pub fn with_overrides(mut self, overrides: HashMap<String, String>) -> ProvisionResult<Self> {
        for (name, color) in overrides {
            let color = normalize_color(&color).ok_or_else(|| {
                ProvisionError::InvalidInput(format!(
                    "Color '{}' for label '{}' is not a 6-digit hex code",
                    color, name
                ))
            })?;
            self.colors.insert(name, color);
        }
        Ok(self)
    }
}

/// Read a `{"label": "RRGGBB"}` JSON file
pub fn load_color_overrides(path: &Path) -> ProvisionResult<HashMap<String, String>> {
    if !path.exists() {
        return Err(ProvisionError::FileMissing(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        ProvisionError::Parse(format!("{}: {}", path.display(), e))
    })
}

fn normalize_color(color: &str) -> Option<String> {
    let hex = color.trim().trim_start_matches('#');
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(hex.to_ascii_uppercase())
    } else {
        None
    }
}
