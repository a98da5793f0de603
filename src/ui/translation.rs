use anyhow::{Context, Result};
use serde_json::Value;

use crate::analysis::presentation::{EXPORTING_KEY, IMPORTING_KEY};
use crate::ui::ui_text::UI_TEXT;

/// Title key for the net exchange tooltip.
pub const NET_EXCHANGE_TITLE_KEY: &str = "tooltips.netExchange";

/// Message-key lookup. A miss returns the key itself so nothing renders blank.
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

/// Plain closures work as translators, e.g. `|key: &str| key.to_uppercase()`.
impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Built-in English strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocale;

impl Translate for EnglishLocale {
    fn translate(&self, key: &str) -> String {
        match key {
            NET_EXCHANGE_TITLE_KEY => UI_TEXT.tooltip_net_exchange_title.to_string(),
            IMPORTING_KEY => UI_TEXT.tooltip_importing.to_string(),
            EXPORTING_KEY => UI_TEXT.tooltip_exporting.to_string(),
            other => other.to_string(),
        }
    }
}

/// Locale backed by a nested JSON document such as `{"tooltips": {"importing": "..."}}`.
///
/// Dotted keys walk the nesting. A literal top-level key containing dots is
/// tried first, which covers flattened locale files too.
#[derive(Debug, Clone)]
pub struct JsonLocale {
    root: Value,
}

impl JsonLocale {
    pub fn from_value(root: Value) -> Self {
        JsonLocale { root }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(text).context("Locale is not valid JSON")?;
        Ok(Self::from_value(root))
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        if let Some(flat) = self.root.get(key).and_then(Value::as_str) {
            return Some(flat);
        }
        key.split('.')
            .try_fold(&self.root, |node, part| node.get(part))
            .and_then(Value::as_str)
    }
}

impl Translate for JsonLocale {
    fn translate(&self, key: &str) -> String {
        self.lookup(key)
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }
}
