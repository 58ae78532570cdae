//! Scene stepper: guided story positions plus a free-exploration tail.
//!
//! The controller owns the navigation cursor and the exploration group
//! selection. It never draws: each step it produces a [`RenderPlan`] and
//! hands the active keys to whatever [`ChartRenderer`] the frontend wired in.

use crate::domain::{Dataset, GroupCatalog, IndicatorKey, Scene};

/// Navigation input events, applied one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    Next,
    Back,
    GroupChanged(String),
}

/// Where the stepper currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Guided(usize),
    Exploration,
}

/// Everything a frontend needs to draw one step of the story.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub position: Position,
    pub title: String,
    pub text: String,
    /// Active keys in stable stacking order.
    pub keys: Vec<IndicatorKey>,
    pub selector_visible: bool,
    pub back_disabled: bool,
    pub next_disabled: bool,
}

/// External chart renderer seam.
///
/// Implementors must tolerate an empty key slice (draw nothing).
pub trait ChartRenderer {
    fn render(&mut self, dataset: &Dataset, keys: &[IndicatorKey]);
}

/// State machine over the guided scenes and the exploration tail.
///
/// The cursor ranges over `[0, scenes.len() + 1]`: values below
/// `scenes.len()` are guided scenes, values at or above it are exploration.
/// `Next` increments while `current <= scenes.len()`, so the cursor rests
/// one step past the exploration entry, and only there does `next_disabled`
/// trip. That off-by-one is the stepper's established observable behavior
/// and is kept as-is.
#[derive(Debug, Clone)]
pub struct SceneController {
    scenes: Vec<Scene>,
    catalog: GroupCatalog,
    current: usize,
    selected_group: String,
}

impl SceneController {
    pub fn new(scenes: Vec<Scene>, catalog: GroupCatalog) -> Self {
        let selected_group = catalog.fallback_name().to_string();
        Self {
            scenes,
            catalog,
            current: 0,
            selected_group,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn catalog(&self) -> &GroupCatalog {
        &self.catalog
    }

    /// The raw selector value, which may name an unknown group.
    pub fn selected_group(&self) -> &str {
        &self.selected_group
    }

    pub fn position(&self) -> Position {
        if self.current < self.scenes.len() {
            Position::Guided(self.current)
        } else {
            Position::Exploration
        }
    }

    /// Apply one navigation event. Returns true when a re-render is due.
    ///
    /// `Next` and `Back` always schedule a render, boundary no-op or not.
    /// A group change only matters while exploring; during a guided scene
    /// it is recorded for later but draws nothing.
    pub fn apply(&mut self, event: NavEvent) -> bool {
        match event {
            NavEvent::Next => {
                if self.current <= self.scenes.len() {
                    self.current += 1;
                }
                true
            }
            NavEvent::Back => {
                if self.current > 0 {
                    self.current -= 1;
                }
                true
            }
            NavEvent::GroupChanged(name) => {
                self.selected_group = name;
                matches!(self.position(), Position::Exploration)
            }
        }
    }

    /// Compute the plan for the current step.
    pub fn render_plan(&self) -> RenderPlan {
        let (title, text, keys, selector_visible) = match self.position() {
            Position::Guided(i) => {
                let scene = &self.scenes[i];
                let group = self.catalog.resolve(&scene.group);
                (scene.title.clone(), scene.text.clone(), group.keys.clone(), false)
            }
            Position::Exploration => {
                let group = self.catalog.resolve(&self.selected_group);
                (
                    format!("View the {}", capitalize(&self.selected_group)),
                    "Free-form comparison after the guided story.".to_string(),
                    group.keys.clone(),
                    true,
                )
            }
        };

        RenderPlan {
            position: self.position(),
            title,
            text,
            keys,
            selector_visible,
            back_disabled: self.current == 0,
            next_disabled: self.current > self.scenes.len(),
        }
    }

    /// Render one step: compute the plan and invoke the chart renderer.
    ///
    /// The chart call is skipped when there is nothing to draw: no dataset
    /// (failed load), an empty dataset, or an empty key set. The rest of
    /// the plan (title, text, affordances) is still produced.
    pub fn render_into(
        &self,
        dataset: Option<&Dataset>,
        renderer: &mut dyn ChartRenderer,
    ) -> RenderPlan {
        let plan = self.render_plan();
        if let Some(dataset) = dataset {
            if !dataset.is_empty() && !plan.keys.is_empty() {
                renderer.render(dataset, &plan.keys);
            }
        }
        plan
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
