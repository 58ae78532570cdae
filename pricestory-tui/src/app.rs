//! Application state — single-owner, main-thread only.
//!
//! Everything the frames read lives here: the scene controller, the loaded
//! dataset (if any), and the status line. The dataset is loaded exactly
//! once, in `AppState::new`; a failed load leaves `data` empty and parks
//! the error in the status bar for the rest of the session.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use pricestory_core::config::{ConfigError, StoryConfig};
use pricestory_core::controller::{NavEvent, RenderPlan, SceneController};
use pricestory_core::data::{self, synthetic, LoadedDataset};
use pricestory_core::domain::{Dataset, IndicatorKey};

use crate::theme::Theme;

/// CSV looked for when neither flag nor config names one.
pub const DEFAULT_CSV: &str = "US_Stock_Data.csv";

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

pub struct AppState {
    pub controller: SceneController,
    pub data: Option<LoadedDataset>,
    pub status: String,
    pub status_level: StatusLevel,
    /// Every catalog key in declaration order; series colors index into this
    /// so a key keeps its color across scenes.
    pub key_order: Vec<IndicatorKey>,
    pub theme: Theme,
    pub show_help: bool,
    pub running: bool,
}

impl AppState {
    pub fn new(
        config: &StoryConfig,
        csv_override: Option<&Path>,
        synthetic_data: bool,
    ) -> Result<Self, ConfigError> {
        let catalog = config.catalog()?;
        let controller = config.controller()?;
        let key_order = catalog.all_keys();

        let (data, status, status_level) = if synthetic_data {
            let start = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
            let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
            let loaded = synthetic::generate(&catalog, start, end);
            let status = format!("Synthetic demo data: {} rows", loaded.dataset.len());
            (Some(loaded), status, StatusLevel::Info)
        } else {
            let path: PathBuf = csv_override
                .map(Path::to_path_buf)
                .or_else(|| config.csv.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV));
            match data::load_csv(&path, &catalog) {
                Ok(loaded) => {
                    let status = format!(
                        "Loaded {} rows ({} dropped) from {}",
                        loaded.dataset.len(),
                        loaded.rows_dropped,
                        loaded.source.label()
                    );
                    (Some(loaded), status, StatusLevel::Info)
                }
                Err(err) => (
                    None,
                    format!("Error loading data: {err}"),
                    StatusLevel::Error,
                ),
            }
        };

        Ok(Self {
            controller,
            data,
            status,
            status_level,
            key_order,
            theme: Theme::default(),
            show_help: false,
            running: true,
        })
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.data.as_ref().map(|d| &d.dataset)
    }

    pub fn plan(&self) -> RenderPlan {
        self.controller.render_plan()
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn next(&mut self) {
        self.controller.apply(NavEvent::Next);
    }

    pub fn back(&mut self) {
        self.controller.apply(NavEvent::Back);
    }

    /// Advance the selector to the next catalog group.
    pub fn cycle_group(&mut self) {
        let catalog = self.controller.catalog();
        let resolved = catalog.resolve(self.controller.selected_group()).name.clone();
        let groups = catalog.groups();
        let idx = groups.iter().position(|g| g.name == resolved).unwrap_or(0);
        let next = groups[(idx + 1) % groups.len()].name.clone();
        self.controller.apply(NavEvent::GroupChanged(next));
    }

    /// Jump straight to a group by catalog position.
    pub fn select_group(&mut self, index: usize) {
        let name = self
            .controller
            .catalog()
            .groups()
            .get(index)
            .map(|g| g.name.clone());
        if let Some(name) = name {
            self.controller.apply(NavEvent::GroupChanged(name));
        }
    }

    /// Stable color slot for a key.
    pub fn color_index(&self, key: &str) -> usize {
        self.key_order.iter().position(|k| k == key).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricestory_core::controller::Position;

    fn synthetic_app() -> AppState {
        AppState::new(&StoryConfig::default_story(), None, true).unwrap()
    }

    #[test]
    fn synthetic_app_starts_with_data_and_first_scene() {
        let app = synthetic_app();
        assert!(app.dataset().is_some());
        assert_eq!(app.status_level, StatusLevel::Info);
        assert_eq!(app.plan().position, Position::Guided(0));
    }

    #[test]
    fn missing_csv_leaves_app_navigable_with_error() {
        let config = StoryConfig::default_story();
        let mut app = AppState::new(
            &config,
            Some(Path::new("definitely/not/here.csv")),
            false,
        )
        .unwrap();

        assert!(app.dataset().is_none());
        assert_eq!(app.status_level, StatusLevel::Error);
        assert!(app.status.starts_with("Error loading data:"));

        // Navigation still works without data.
        app.next();
        app.next();
        assert_eq!(app.plan().position, Position::Guided(2));
    }

    #[test]
    fn cycle_group_walks_the_catalog_in_order() {
        let mut app = synthetic_app();
        // Starts on the fallback ("commodities"); cycling wraps to the top.
        app.cycle_group();
        assert_eq!(app.controller.selected_group(), "stocks");
        app.cycle_group();
        assert_eq!(app.controller.selected_group(), "oil");
        app.cycle_group();
        assert_eq!(app.controller.selected_group(), "commodities");
    }

    #[test]
    fn select_group_ignores_out_of_range_indices() {
        let mut app = synthetic_app();
        app.select_group(1);
        assert_eq!(app.controller.selected_group(), "oil");
        app.select_group(99);
        assert_eq!(app.controller.selected_group(), "oil");
    }

    #[test]
    fn color_index_is_stable_across_scenes() {
        let mut app = synthetic_app();
        let before = app.color_index("Gold_Price");
        app.next();
        app.next();
        assert_eq!(app.color_index("Gold_Price"), before);
    }
}
