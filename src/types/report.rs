//! Location report schema
//!
//! The versioned structured report returned by the research endpoint. The
//! invariant-bearing parts are typed: all four season keys must be present
//! and a service category must belong to the closed set. The numerous flat
//! informational sections (technicalData, accessibility, parking, ...) are
//! carried through a flattened map; their inner content is model-defined.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::tags::TagBundle;

/// Season identifiers used across descriptions and service availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Summer,
    Spring,
    Autumn,
}

/// Seasonal descriptions; deserialization fails when any season is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalDescriptions {
    pub winter: String,
    pub summer: String,
    pub spring: String,
    pub autumn: String,
}

/// Closed set of service categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Tourism,
    Accommodation,
    Infrastructure,
    Essential,
    Sport,
    Info,
    General,
}

/// A single service entry (lift, hotel, pharmacy, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub name: String,
    pub category: ServiceCategory,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "seasonAvailability", default)]
    pub season_availability: Vec<Season>,
}

/// Structured tourism-location report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub name: String,
    pub description: SeasonalDescriptions,
    #[serde(default)]
    pub services: Vec<ServiceEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<TagBundle>,
    /// Flat informational sections: technicalData, accessibility, parking,
    /// localMobility, infoPoints, medical, advancedSkiing, outdoorNonSki,
    /// family, rentals, eventsAndSeasonality, gastronomy, digital,
    /// practicalTips, openingHours, safety, sustainability, profile, ...
    #[serde(flatten)]
    pub sections: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_descriptions() -> Value {
        json!({
            "winter": "piste",
            "summer": "sentieri",
            "spring": "fioriture",
            "autumn": "foliage"
        })
    }

    #[test]
    fn report_requires_all_four_seasons() {
        let missing = json!({
            "name": "Livigno",
            "description": {"winter": "a", "summer": "b", "spring": "c"}
        });
        assert!(serde_json::from_value::<LocationReport>(missing).is_err());

        let complete = json!({
            "name": "Livigno",
            "description": full_descriptions()
        });
        let report: LocationReport = serde_json::from_value(complete).unwrap();
        assert_eq!(report.description.winter, "piste");
        assert!(report.services.is_empty());
    }

    #[test]
    fn service_category_is_closed() {
        let bad = json!({
            "name": "X",
            "description": full_descriptions(),
            "services": [{"name": "Funivia", "category": "shopping-mall"}]
        });
        assert!(serde_json::from_value::<LocationReport>(bad).is_err());

        let good = json!({
            "name": "X",
            "description": full_descriptions(),
            "services": [{
                "name": "Funivia Carosello",
                "category": "infrastructure",
                "description": "Cabinovia fino a 2750m",
                "seasonAvailability": ["winter", "summer"]
            }]
        });
        let report: LocationReport = serde_json::from_value(good).unwrap();
        assert_eq!(report.services[0].category, ServiceCategory::Infrastructure);
        assert_eq!(
            report.services[0].season_availability,
            vec![Season::Winter, Season::Summer]
        );
    }

    #[test]
    fn flat_sections_roundtrip_through_flatten() {
        let v = json!({
            "name": "X",
            "description": full_descriptions(),
            "technicalData": {"totalSkiKm": 115, "maxAltitude": 2797},
            "gastronomy": {"typicalDishes": ["pizzoccheri"]}
        });
        let report: LocationReport = serde_json::from_value(v.clone()).unwrap();
        assert_eq!(report.sections["technicalData"]["totalSkiKm"], 115);
        let back = serde_json::to_value(&report).unwrap();
        assert_eq!(back["gastronomy"], v["gastronomy"]);
    }
}
