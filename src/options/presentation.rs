use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Presentation", inline)]
#[serde(default)]
/// Wrapper element and attributes passed through to the engine untouched.
pub struct PresentationOptions {
    /// Element the units are mounted in.
    #[schemars(title = "Element")]
    pub element: String,
    /// Extra attributes for the wrapper (class, style, data-*).
    #[schemars(skip)]
    pub attributes: BTreeMap<String, String>,
}

impl Default for PresentationOptions {
    fn default() -> Self {
        Self {
            element: "span".to_owned(),
            attributes: BTreeMap::new(),
        }
    }
}
