//! Tag bundle and fixed vocabularies
//!
//! Two kinds of tag lists: closed-vocabulary tags (vibe, target, activities)
//! whose values must belong to a fixed ID set, and free-text tags. A
//! closed-vocabulary violation is a soft issue: it is reported and logged,
//! never a hard failure.

use serde::{Deserialize, Serialize};

/// Fixed vibe IDs.
pub const VIBE_IDS: &[&str] = &[
    "relax", "sport", "party", "luxury", "nature", "tradition", "work", "silence",
];

/// Fixed target-audience IDs.
pub const TARGET_IDS: &[&str] = &["family", "couple", "friends", "solo"];

/// Fixed activity IDs.
pub const ACTIVITY_IDS: &[&str] = &[
    "ski",
    "hiking",
    "wellness",
    "food",
    "culture",
    "adrenaline",
    "shopping",
    "photography",
];

/// Free-text tag categories produced by the SEO prompt.
pub const FREE_TAG_CATEGORIES: &[&str] = &[
    "highlights",
    "tourism",
    "accommodation",
    "infrastructure",
    "sport",
    "info",
    "general",
];

/// Tag bundle attached to a report or returned by the tag endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagBundle {
    // Closed-vocabulary lists
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vibe: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<String>,
    // Free-text lists
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tourism: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accommodation: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub infrastructure: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sport: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub info: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub general: Vec<String>,
}

impl TagBundle {
    /// Report closed-vocabulary entries that are not members of their fixed
    /// set, as `category:value` strings. Empty means fully conformant.
    pub fn vocabulary_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        for (category, values, vocabulary) in [
            ("vibe", &self.vibe, VIBE_IDS),
            ("target", &self.target, TARGET_IDS),
            ("activities", &self.activities, ACTIVITY_IDS),
        ] {
            for value in values {
                if !vocabulary.contains(&value.as_str()) {
                    violations.push(format!("{category}:{value}"));
                }
            }
        }
        violations
    }
}
