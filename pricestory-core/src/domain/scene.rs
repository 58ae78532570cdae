//! Scene — one guided step of the story.

use serde::{Deserialize, Serialize};

/// A guided step pairing a title and description with an indicator group.
///
/// Scenes are immutable once the story is built; `group` names a catalog
/// group (validated when the story config is loaded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub id: String,
    pub title: String,
    pub text: String,
    pub group: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_serialization_roundtrip() {
        let scene = Scene {
            id: "stocks".into(),
            title: "Stocks".into(),
            text: "Stock Trends from 2020-2024".into(),
            group: "stocks".into(),
        };
        let json = serde_json::to_string(&scene).unwrap();
        let deser: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(scene, deser);
    }
}
