//! Story configuration: data source, indicator groups, scenes.
//!
//! A story can be loaded from a TOML file or built from the built-in
//! default (the 2020-2024 US price dataset). Cross-references are checked
//! up front: every scene must name a declared group, and so must the
//! fallback.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::controller::SceneController;
use crate::domain::{CatalogError, GroupCatalog, IndicatorGroup, IndicatorKey, Scene};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid story config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("scene '{scene}' references unknown group '{group}'")]
    UnknownSceneGroup { scene: String, group: String },

    #[error("story has no scenes")]
    NoScenes,
}

/// One indicator group declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupConfig {
    pub name: String,
    pub keys: Vec<IndicatorKey>,
}

/// One guided scene declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    pub id: String,
    pub title: String,
    pub text: String,
    pub group: String,
}

/// Top-level story configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryConfig {
    /// CSV path. Optional so the viewer can fall back to synthetic data.
    pub csv: Option<PathBuf>,

    /// Group resolved for unrecognized selector values.
    pub fallback_group: String,

    #[serde(default)]
    pub groups: Vec<GroupConfig>,

    #[serde(default)]
    pub scenes: Vec<SceneConfig>,
}

impl StoryConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// The built-in story: stocks, oil & gas, commodities, 2020-2024.
    pub fn default_story() -> Self {
        Self {
            csv: None,
            fallback_group: "commodities".into(),
            groups: vec![
                GroupConfig {
                    name: "stocks".into(),
                    keys: vec!["S&P_500_Price".into(), "Nasdaq_100_Price".into()],
                },
                GroupConfig {
                    name: "oil".into(),
                    keys: vec!["Natural_Gas_Price".into(), "Crude_Oil_Price".into()],
                },
                GroupConfig {
                    name: "commodities".into(),
                    keys: vec![
                        "Copper_Price".into(),
                        "Platinum_Price".into(),
                        "Silver_Price".into(),
                        "Gold_Price".into(),
                    ],
                },
            ],
            scenes: vec![
                SceneConfig {
                    id: "stocks".into(),
                    title: "Stocks".into(),
                    text: "Stock Trends from 2020-2024".into(),
                    group: "stocks".into(),
                },
                SceneConfig {
                    id: "oil".into(),
                    title: "Oil & Gas Prices".into(),
                    text: "Oil & Gas Prices from 2020-2024".into(),
                    group: "oil".into(),
                },
                SceneConfig {
                    id: "commodities".into(),
                    title: "Commodity Prices".into(),
                    text: "Commodity Prices from 2020-2024".into(),
                    group: "commodities".into(),
                },
            ],
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.scenes.is_empty() {
            return Err(ConfigError::NoScenes);
        }
        let catalog = self.catalog()?;
        for scene in &self.scenes {
            if catalog.group(&scene.group).is_none() {
                return Err(ConfigError::UnknownSceneGroup {
                    scene: scene.id.clone(),
                    group: scene.group.clone(),
                });
            }
        }
        Ok(())
    }

    /// Build the group catalog this story declares.
    pub fn catalog(&self) -> Result<GroupCatalog, ConfigError> {
        let groups = self
            .groups
            .iter()
            .map(|g| IndicatorGroup {
                name: g.name.clone(),
                keys: g.keys.clone(),
            })
            .collect();
        Ok(GroupCatalog::new(groups, &self.fallback_group)?)
    }

    pub fn scenes(&self) -> Vec<Scene> {
        self.scenes
            .iter()
            .map(|s| Scene {
                id: s.id.clone(),
                title: s.title.clone(),
                text: s.text.clone(),
                group: s.group.clone(),
            })
            .collect()
    }

    /// Build a controller for this story.
    pub fn controller(&self) -> Result<SceneController, ConfigError> {
        Ok(SceneController::new(self.scenes(), self.catalog()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_story_is_valid() {
        let config = StoryConfig::default_story();
        assert!(config.validate().is_ok());
        let controller = config.controller().unwrap();
        assert_eq!(controller.scenes().len(), 3);
        assert_eq!(controller.catalog().fallback_name(), "commodities");
    }

    #[test]
    fn toml_roundtrip() {
        let config = StoryConfig::default_story();
        let text = toml::to_string(&config).unwrap();
        let parsed = StoryConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.groups.len(), 3);
        assert_eq!(parsed.scenes.len(), 3);
        assert_eq!(parsed.fallback_group, "commodities");
    }

    #[test]
    fn parses_a_handwritten_story() {
        let text = r#"
fallback_group = "metals"

[[groups]]
name = "metals"
keys = ["Gold_Price", "Silver_Price"]

[[scenes]]
id = "metals"
title = "Metals"
text = "Precious metals over time"
group = "metals"
"#;
        let config = StoryConfig::from_toml(text).unwrap();
        assert_eq!(config.csv, None);
        assert_eq!(config.scenes[0].group, "metals");
    }

    #[test]
    fn rejects_scene_with_unknown_group() {
        let text = r#"
fallback_group = "metals"

[[groups]]
name = "metals"
keys = ["Gold_Price"]

[[scenes]]
id = "oil"
title = "Oil"
text = "Oil prices"
group = "oil"
"#;
        let err = StoryConfig::from_toml(text).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSceneGroup { .. }));
    }

    #[test]
    fn rejects_unknown_fallback_group() {
        let text = r#"
fallback_group = "bonds"

[[groups]]
name = "metals"
keys = ["Gold_Price"]

[[scenes]]
id = "metals"
title = "Metals"
text = "Precious metals"
group = "metals"
"#;
        let err = StoryConfig::from_toml(text).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Catalog(CatalogError::UnknownFallback(_))
        ));
    }

    #[test]
    fn rejects_empty_story() {
        let text = r#"
fallback_group = "metals"

[[groups]]
name = "metals"
keys = ["Gold_Price"]
"#;
        let err = StoryConfig::from_toml(text).unwrap_err();
        assert!(matches!(err, ConfigError::NoScenes));
    }
}
