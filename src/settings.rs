use crate::error::DocError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_GENERATOR_NAME: &str = "apidoc-md";

/// Options the document-assembly layer passes to [`crate::api::Globals`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
    /// Named in the "do not edit" comment of every generated page.
    pub generator_name: String,
    /// Ignore any HTTP overlay and document the plain service.
    pub no_http: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            generator_name: DEFAULT_GENERATOR_NAME.to_string(),
            no_http: false,
        }
    }
}

impl GeneratorSettings {
    /// # Errors
    /// Returns `DocError::Json` if the text is not a valid settings object.
    pub fn from_json(source: &str) -> Result<Self, DocError> {
        Ok(serde_json::from_str(source)?)
    }

    /// # Errors
    /// Returns `DocError::Yaml` if the text is not a valid settings mapping.
    pub fn from_yaml(source: &str) -> Result<Self, DocError> {
        Ok(serde_yaml::from_str(source)?)
    }
}
