//! Head and tail colors, read once at startup.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use eframe::egui::Color32;
use serde::Deserialize;

pub const DEFAULT_HEAD_COLOR: &str = "#4a90e2";
pub const DEFAULT_TAIL_COLOR: &str = "#c4dbf5";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StyleConfig {
    pub head_color: String,
    pub tail_color: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            head_color: DEFAULT_HEAD_COLOR.to_owned(),
            tail_color: DEFAULT_TAIL_COLOR.to_owned(),
        }
    }
}

impl StyleConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read style file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid style file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("style JSON did not match the expected shape")
    }

    pub fn with_overrides(mut self, head_color: Option<String>, tail_color: Option<String>) -> Self {
        if let Some(head_color) = head_color {
            self.head_color = head_color;
        }
        if let Some(tail_color) = tail_color {
            self.tail_color = tail_color;
        }
        self
    }

    pub fn palette(&self) -> Result<Palette> {
        Ok(Palette {
            head: parse_color(&self.head_color).context("invalid head color")?,
            tail: parse_color(&self.tail_color).context("invalid tail color")?,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub head: Color32,
    pub tail: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            head: Color32::from_rgb(0x4a, 0x90, 0xe2),
            tail: Color32::from_rgb(0xc4, 0xdb, 0xf5),
        }
    }
}

/// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`; the `#` is optional.
pub fn parse_color(value: &str) -> Result<Color32> {
    let trimmed = value.trim();
    let hex = if trimmed.starts_with('#') {
        trimmed.to_owned()
    } else {
        format!("#{trimmed}")
    };

    Color32::from_hex(&hex).map_err(|error| anyhow!("cannot parse color {value:?}: {error:?}"))
}
