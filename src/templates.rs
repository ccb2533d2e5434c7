//! Template catalog: named seed sets for new lists.
//!
//! A template maps a key to a display name and a pre-built sequence of
//! [`ItemDraft`]s, used only as optional seed input to
//! [`ListStore::create_list`](crate::ListStore::create_list). The catalog
//! ships four built-ins embedded at compile time and can also load custom
//! templates from user TOML files.
//!
//! # Built-in Templates
//!
//! - `monthly`: the big monthly staples run
//! - `weekly-market`: fresh produce for the week
//! - `cleaning`: household cleaning supplies
//! - `party`: drinks and barbecue
//!
//! # TOML Format
//!
//! ```toml
//! key = "weekly-market"
//! name = "Weekly Market"
//!
//! [[items]]
//! name = "Tomatoes"
//! quantity = 1.0
//! unit = "kg"
//! estimated_price = 7.0
//! is_priority = true
//! ```
//!
//! # Example
//!
//! ```
//! use carrinho::templates::Template;
//!
//! let template = Template::from_name("party").unwrap();
//! assert!(!template.items.is_empty());
//! ```

use crate::domain::error::{Error, Result};
use crate::domain::ItemDraft;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Keys of the built-in templates, in display order.
pub const BUILTIN_KEYS: [&str; 4] = ["monthly", "weekly-market", "cleaning", "party"];

/// A named, predefined seed set of item drafts.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Template {
    /// Stable lookup key, e.g. `"weekly-market"`.
    pub key: String,

    /// Human-readable template name.
    pub name: String,

    /// Item drafts instantiated into fresh items at list creation.
    #[serde(default)]
    pub items: Vec<ItemDraft>,
}

impl Template {
    /// Loads a built-in template by key.
    ///
    /// Supported keys are listed in [`BUILTIN_KEYS`].
    ///
    /// # Returns
    ///
    /// - `Some(Template)` if the key is recognized
    /// - `None` if the key is unknown
    #[must_use]
    pub fn from_name(key: &str) -> Option<Self> {
        let toml_str = match key {
            "monthly" => include_str!("../templates/monthly.toml"),
            "weekly-market" => include_str!("../templates/weekly-market.toml"),
            "cleaning" => include_str!("../templates/cleaning.toml"),
            "party" => include_str!("../templates/party.toml"),
            _ => return None,
        };
        toml::from_str(toml_str).ok()
    }

    /// Loads a custom template from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] if the file cannot be read or parsed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use carrinho::templates::Template;
    ///
    /// let template = Template::from_file("/path/to/template.toml")?;
    /// # Ok::<(), carrinho::Error>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| Error::Template(format!("failed to read template file: {e}")))?;
        toml::from_str(&contents)
            .map_err(|e| Error::Template(format!("failed to parse template file: {e}")))
    }

    /// All built-in templates, in display order.
    #[must_use]
    pub fn builtin() -> Vec<Self> {
        BUILTIN_KEYS.iter().filter_map(|key| Self::from_name(key)).collect()
    }
}
