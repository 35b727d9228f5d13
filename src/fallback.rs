//! Static fallback payload
//!
//! When no model credential is configured, research requests are served from
//! this fixed example report with the caller's requested name substituted.
//! It simulates the full success path without ever calling the model.

use serde_json::json;

use crate::types::report::{
    LocationReport, Season, SeasonalDescriptions, ServiceCategory, ServiceEntry,
};

/// Fixed example report for the given location name.
pub fn sample_report(location_name: &str) -> LocationReport {
    let sections = json!({
        "profile": {
            "target": "famiglie",
            "priceLevel": "€€",
            "style": "tradizionale alpino",
            "vibe": "Rilassata e autentica (Mock)"
        },
        "technicalData": {
            "totalSkiKm": 50,
            "minAltitude": 1200,
            "maxAltitude": 2500,
            "totalLifts": 15,
            "seasonStart": "Dicembre",
            "seasonEnd": "Aprile",
            "sunHoursYear": 2000
        },
        "accessibility": {
            "airports": ["Aeroporto Mock (100km)"],
            "train": "Stazione Mock a 10km",
            "car": "Accessibile via autostrada",
            "accessToResort": "Strada comoda"
        },
        "parking": {
            "mainAreas": [{
                "name": "P1 Central",
                "type": "Coperto",
                "capacity": "500",
                "price": "Gratis",
                "distance": "50m",
                "features": ["Navetta"]
            }],
            "tips": "Parcheggia al P1"
        },
        "localMobility": {
            "skiBus": "Gratuito",
            "connections": "Buoni",
            "carFreeZones": "Centro",
            "nightMobility": "Taxi"
        },
        "infoPoints": {
            "locations": ["Centro"],
            "hours": "9-18",
            "languages": "IT, EN",
            "services": ["Skipass"]
        },
        "medical": {
            "pharmacies": "Farmacia Centrale",
            "nearestHospital": "Ospedale (30km)",
            "emergencies": "112"
        },
        "advancedSkiing": {
            "slopesPercent": {"blue": "40%", "red": "40%", "black": "20%"},
            "crowdLevel": "Medio",
            "snowMaking": "80%",
            "connections": "Nessuno"
        },
        "outdoorNonSki": {
            "activities": ["Ciaspole"],
            "iconicTreks": ["Lago Blu"],
            "wellness": "Aquapark"
        },
        "family": {
            "kindergartens": "Si",
            "kidsSlopes": "Si",
            "facilities": "Playground",
            "rating": "8/10"
        },
        "rentals": {
            "types": ["Sci", "E-bike"],
            "services": ["Deposito"],
            "prices": "€30/giorno",
            "tips": "Prenota online"
        },
        "eventsAndSeasonality": {
            "topEvents": ["Capodanno in Piazza"],
            "seasonTips": "Gennaio top"
        },
        "gastronomy": {
            "typicalDishes": ["Polenta"],
            "topDining": "Ristorante Vetta",
            "localProducts": ["Formaggio Malga"]
        },
        "digital": {
            "app": "MyResort App",
            "wifi": "Hotel e Piazze",
            "remoteWork": "Possibile"
        },
        "practicalTips": {
            "crowds": "Natale",
            "bestTimes": "Gennaio",
            "criticalIssues": "Freddo"
        },
        "openingHours": {
            "lifts": "8:30 - 16:30",
            "shops": "9-19",
            "restaurants": "12-14, 19-22"
        },
        "safety": {
            "rules": "Casco obbligatorio",
            "dronePolicy": "Vietati"
        },
        "sustainability": {
            "energy": "Idroelettrico",
            "mobility": "Bus Elettrici",
            "certifications": "ISO"
        }
    });

    let sections = match sections {
        serde_json::Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };

    LocationReport {
        version: None,
        name: location_name.to_string(),
        description: SeasonalDescriptions {
            winter: "Descrizione Invernale Mock: la località offre piste perfette.".to_string(),
            summer: "Descrizione Estiva Mock: sentieri e natura.".to_string(),
            spring: "Descrizione Primaverile Mock.".to_string(),
            autumn: "Descrizione Autunnale Mock.".to_string(),
        },
        services: vec![ServiceEntry {
            name: "Funivia Panoramica Mock".to_string(),
            category: ServiceCategory::Infrastructure,
            description: "Cabinovia demo, 1200-2500m, aperta 8:30-16:30.".to_string(),
            season_availability: vec![Season::Winter, Season::Summer],
        }],
        tags: None,
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_substituted() {
        let report = sample_report("Alagna Valsesia");
        assert_eq!(report.name, "Alagna Valsesia");
    }

    #[test]
    fn all_four_seasons_present_in_serialized_form() {
        let v = serde_json::to_value(sample_report("X")).unwrap();
        for season in ["winter", "summer", "spring", "autumn"] {
            assert!(v["description"][season].is_string(), "missing {season}");
        }
        assert_eq!(v["technicalData"]["totalSkiKm"], 50);
    }

    #[test]
    fn roundtrips_through_the_report_schema() {
        let v = serde_json::to_value(sample_report("X")).unwrap();
        let back: LocationReport = serde_json::from_value(v).unwrap();
        assert_eq!(back.services.len(), 1);
    }
}
