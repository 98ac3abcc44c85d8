// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON presets and configuration layering.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dotline_core::{Color, Configuration, Rgba, Style};
use serde::Deserialize;
use tracing::debug;

use crate::cli::IndicatorArgs;

/// Preset file; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    pub pages: Option<usize>,
    pub style: Option<Style>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub padding: Option<f32>,
    pub active: Option<String>,
    pub inactive: Option<String>,
}

impl Preset {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading preset {}", path.display()))?;
        let preset = serde_json::from_str(&text)
            .with_context(|| format!("parsing preset {}", path.display()))?;
        debug!(path = %path.display(), "loaded preset");
        Ok(preset)
    }
}

fn parse_color(field: &str, raw: &str) -> Result<Rgba> {
    let color: Color = raw.parse().with_context(|| format!("preset field `{field}`"))?;
    color
        .to_rgba()
        .with_context(|| format!("preset field `{field}`"))
}

/// Defaults, then the preset (if any), then explicit flags.
pub fn resolve(args: &IndicatorArgs) -> Result<Configuration> {
    let preset = match &args.config {
        Some(path) => Preset::load(path)?,
        None => Preset::default(),
    };
    let mut config = Configuration::default();

    if let Some(pages) = args.pages.or(preset.pages) {
        config.number_of_pages = pages;
    }
    if let Some(style) = args.style.or(preset.style) {
        config.style = style;
    }
    if let Some(width) = args.width.or(preset.width) {
        config.indicator_width = width;
    }
    if let Some(height) = args.height.or(preset.height) {
        config.indicator_height = height;
    }
    if let Some(padding) = args.padding.or(preset.padding) {
        config.indicator_padding = padding;
    }

    if let Some(color) = &args.active {
        config.active_color = color.to_rgba().context("--active")?;
    } else if let Some(raw) = &preset.active {
        config.active_color = parse_color("active", raw)?;
    }
    if let Some(color) = &args.inactive {
        config.inactive_color = color.to_rgba().context("--inactive")?;
    } else if let Some(raw) = &preset.inactive {
        config.inactive_color = parse_color("inactive", raw)?;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]
    use super::*;
    use std::io::Write;

    fn args() -> IndicatorArgs {
        IndicatorArgs {
            config: None,
            pages: None,
            style: None,
            width: None,
            height: None,
            padding: None,
            active: None,
            inactive: None,
        }
    }

    #[test]
    fn flags_override_preset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"{{"pages": 4, "style": "fill", "width": 8, "active": "#ff0000"}}"##
        )
        .unwrap();
        let resolved = resolve(&IndicatorArgs {
            config: Some(file.path().to_path_buf()),
            pages: Some(6),
            ..args()
        })
        .unwrap();
        assert_eq!(resolved.number_of_pages, 6);
        assert_eq!(resolved.style, Style::Fill);
        assert_eq!(resolved.indicator_width, 8.0);
        assert_eq!(resolved.indicator_height, 5.0);
        assert_eq!(resolved.active_color, Rgba::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn unknown_preset_fields_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"pagez": 4}}"#).unwrap();
        let err = resolve(&IndicatorArgs {
            config: Some(file.path().to_path_buf()),
            ..args()
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("parsing preset"));
    }

    #[test]
    fn defaults_without_preset() {
        assert_eq!(resolve(&args()).unwrap(), Configuration::default());
    }
}
