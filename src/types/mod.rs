//! Core data types
//!
//! The structured report schema, tag vocabularies and request payloads.

pub mod report;
pub mod requests;
pub mod tags;

pub use report::{LocationReport, Season, SeasonalDescriptions, ServiceCategory, ServiceEntry};
pub use requests::{GenerateTagsRequest, ResearchRequest, TagMode, TranslateRequest};
pub use tags::{ACTIVITY_IDS, FREE_TAG_CATEGORIES, TARGET_IDS, TagBundle, VIBE_IDS};
