use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub templates: Templates,
}

/// Output templates — filename patterns and body templates for the
/// generated header/source pair. Fields left unset fail when first
/// referenced during generation, not at load time.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Templates {
    /// Filename pattern for generated headers, e.g. `Mock{interface}.hpp`
    #[serde(default)]
    pub mock_file_hpp: Option<String>,
    /// Body template for generated headers; empty skips header output
    #[serde(default)]
    pub file_template_hpp: Option<String>,
    /// Filename pattern for generated sources
    #[serde(default)]
    pub mock_file_cpp: Option<String>,
    /// Body template for generated sources; empty skips source output
    #[serde(default)]
    pub file_template_cpp: Option<String>,
}

const DEFAULT_HPP_TEMPLATE: &str = r#"#ifndef {guard}
#define {guard}

#include <gmock/gmock.h>

#include "{dir}/{file}"

{namespaces_begin}

{template}class Mock{interface} : public {template_interface} {
public:
{mock_methods}
};

{namespaces_end}

#endif // {guard}
"#;

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// The built-in configuration: header-only gmock output.
    pub fn default_config() -> Self {
        Config {
            templates: Templates {
                mock_file_hpp: Some("Mock{interface}.hpp".to_string()),
                file_template_hpp: Some(DEFAULT_HPP_TEMPLATE.to_string()),
                mock_file_cpp: Some("Mock{interface}.cpp".to_string()),
                file_template_cpp: None,
            },
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
