use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::GraphResult;

pub const DEFAULT_CONNECTIVITY_THRESHOLD: usize = 10;
pub const DEFAULT_TRUNCATE_LEN: usize = 5;

/// Hex colors without the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub registered: String,
    pub popular: String,
    pub sparse: String,
    pub edge: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            registered: "ce54ff".to_string(),
            popular: "ffff00".to_string(),
            sparse: "333333".to_string(),
            edge: "000".to_string(),
        }
    }
}

/// Knobs of the graph renderer. Any field missing from a config file keeps
/// its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Unregistered numbers with at least this degree are rendered as popular.
    pub connectivity_threshold: usize,
    /// Characters of a sparse number kept in its `phone` attribute.
    pub truncate_len: usize,
    pub ellipsis: String,
    /// Label of every node whose owner is not registered.
    pub unknown_label: String,
    pub palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            connectivity_threshold: DEFAULT_CONNECTIVITY_THRESHOLD,
            truncate_len: DEFAULT_TRUNCATE_LEN,
            ellipsis: "...".to_string(),
            unknown_label: "???".to_string(),
            palette: Palette::default(),
        }
    }
}

impl RenderConfig {
    pub fn from_file(path: impl AsRef<Path>) -> GraphResult<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.connectivity_threshold = threshold;
        self
    }

    pub fn with_truncate_len(mut self, len: usize) -> Self {
        self.truncate_len = len;
        self
    }

    /// First `truncate_len` characters followed by the ellipsis. Short numbers
    /// are kept whole and still get the ellipsis.
    pub fn truncate_phone(&self, phone: &str) -> String {
        let mut shown: String = phone.chars().take(self.truncate_len).collect();
        shown.push_str(&self.ellipsis);
        shown
    }
}
