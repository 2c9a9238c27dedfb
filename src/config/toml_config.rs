use crate::core::validator::{ValidationMode, ValidationRules};
use crate::domain::model::ContentStore;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{compile_pattern, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSection {
    #[serde(default)]
    pub mode: ValidationMode,
    #[serde(flatten)]
    pub rules: ValidationRules,
}

/// A content file: the page records plus an optional `[validation]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentFile {
    #[serde(flatten)]
    pub content: ContentStore,
    #[serde(default)]
    pub validation: ValidationSection,
}

impl ContentFile {
    /// 從 TOML 檔案載入內容
    pub fn from_file<P: AsRef<Path>>(path: P, vars: &HashMap<String, String>) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PortfolioError::IoError)?;
        Self::from_toml_str(&content, vars)
    }

    /// 從 TOML 字串解析內容
    pub fn from_toml_str(content: &str, vars: &HashMap<String, String>) -> Result<Self> {
        let processed_content = substitute_vars(content, vars)?;

        toml::from_str(&processed_content).map_err(|e| PortfolioError::ContentParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn into_parts(self) -> (ContentStore, ValidationSection) {
        (self.content, self.validation)
    }
}

/// Replace `${VAR}` from `vars`, then the environment. Unknown names stay as written.
pub fn substitute_vars(content: &str, vars: &HashMap<String, String>) -> Result<String> {
    let re = compile_pattern("placeholder", r"\$\{([^}]+)\}")?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        vars.get(var_name)
            .cloned()
            .or_else(|| std::env::var(var_name).ok())
            .unwrap_or_else(|| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}

pub fn to_toml_string(store: &ContentStore) -> Result<String> {
    toml::to_string_pretty(store).map_err(|e| PortfolioError::SerializationError {
        message: e.to_string(),
    })
}

impl Validate for ContentFile {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string(
            "validation.required_project",
            &self.validation.rules.required_project,
        )?;
        compile_pattern(
            "validation.social_url_pattern",
            &self.validation.rules.social_url_pattern,
        )?;
        Ok(())
    }
}
