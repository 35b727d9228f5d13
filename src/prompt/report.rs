//! Full-report prompt variants
//!
//! Three breadth variants of the report instruction. They differ only in
//! target language and schema breadth; all fix the season keys, the service
//! schema and the JSON-only contract.

use serde::{Deserialize, Serialize};

/// Breadth variant of the full-report prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportVariant {
    /// Core schema (seasonal descriptions + services), Italian content
    Minimal,
    /// Full schema with all flat informational sections, Italian content
    #[default]
    Extended,
    /// Core schema plus tag vocabularies, all content in English
    Translated,
}

const MINIMAL_SYSTEM: &str = r#"Sei un analista turistico esperto di montagna, incaricato di redigere un report dettagliato e completo su una specifica località per un comparatore turistico avanzato.

Il tuo obiettivo è fornire una descrizione esaustiva ("verbose") e dati strutturati molto precisi.
Non limitarti a liste puntate brevi: scrivi paragrafi descrittivi che catturino l'atmosfera e i dettagli.

Struttura JSON richiesta in output:
{
  "name": "Nome Località",
  "description": {
     "winter": "Descrizione approfondita dell'offerta invernale...",
     "summer": "Descrizione approfondita dell'offerta estiva...",
     "autumn": "Descrizione dell'offerta autunnale...",
     "spring": "Descrizione dell'offerta primaverile..."
  },
  "services": [
    {
      "name": "Nome Servizio (es. Funivia Marmolada, Hotel Bellavista)",
      "category": "tourism|accommodation|infrastructure|essential",
      "description": "Descrizione RICCA. Includi orari, prezzi indicativi, caratteristiche tecniche (es. dislivello, lunghezza pista, stelle hotel).",
      "seasonAvailability": ["winter", "summer"]
    }
  ]
}
All details must be in Italian.

ISTRUZIONI PER CATEGORIA DI SERVIZIO:

1. **TOURISM (Attività)**:
   - Piste da sci: specifica km totali, difficoltà (blu/rosse/nere), snowpark.
   - Trekking/MTB: nomi sentieri famosi, difficoltà.
   - Altro: musei, terme, parchi avventura.

2. **ACCOMMODATION (Ospitalità)**:
   - Cita i protagonisti (hotel famosi, rifugi storici).
   - Descrivi lo stile (lusso, rustico, moderno) e i servizi (spa, ski-in/ski-out).

3. **INFRASTRUCTURE (Impianti/Trasporti)**:
   - Impianti chiave: funivie, cabinovie (portata, altitudine raggiunta).
   - Noleggi e scuole sci.

4. **ESSENTIAL**:
   - Farmacie, parcheggi principali, info point.

IMPORTANTE:
1. Compila PRIMA le descrizioni per TUTTE le 4 stagioni (inverno, primavera, estate, autunno).
2. Poi elenca una lista ESTESA di servizi specifici con descrizioni dettagliate.
3. Se un dato tecnico (km, altitudine) è disponibile, INCLUDILO nella descrizione del servizio.

Rispondi SOLO con JSON valido. Niente markdown, niente blocchi di codice."#;

const EXTENDED_SYSTEM: &str = r#"Sei un analista turistico esperto di montagna, incaricato di redigere un report dettagliato e completo su una specifica località per un comparatore turistico avanzato.

Il tuo obiettivo è fornire una descrizione esaustiva ("verbose") e dati strutturati molto precisi.
Non limitarti a liste puntate brevi: scrivi paragrafi descrittivi che catturino l'atmosfera e i dettagli.

Struttura JSON richiesta in output (TUTTI i campi sono obbligatori):
{
  "name": "Nome Località",
  "description": {
     "winter": "Descrizione approfondita dell'offerta invernale...",
     "summer": "Descrizione approfondita dell'offerta estiva...",
     "autumn": "Descrizione dell'offerta autunnale...",
     "spring": "Descrizione dell'offerta primaverile..."
  },
  "services": [
    {
      "name": "Nome Servizio (es. Funivia Marmolada, Hotel Bellavista)",
      "category": "tourism|accommodation|infrastructure|essential|sport|info|general",
      "description": "Descrizione RICCA. Includi orari, prezzi indicativi, caratteristiche tecniche (es. dislivello, lunghezza pista, stelle hotel).",
      "seasonAvailability": ["winter", "summer"]
    }
  ],
  "profile": {
      "target": "famiglie / coppie / luxury / sportivi / giovani",
      "priceLevel": "€ / €€ / €€€ / €€€€",
      "style": "tradizionale alpino / glamour / sportivo / wild",
      "vibe": "Descrizione breve dell'atmosfera"
  },
  "technicalData": {
      "totalSkiKm": 0,
      "minAltitude": 0,
      "maxAltitude": 0,
      "totalLifts": 0,
      "seasonStart": "Mese inizio",
      "seasonEnd": "Mese fine",
      "sunHoursYear": 0
  },
  "accessibility": {
      "airports": ["Aeroporto 1 (distanza)", "Aeroporto 2 (distanza)"],
      "train": "Stazione e collegamenti",
      "car": "Accesso stradale, passi critici",
      "accessToResort": "Info specifiche arrivo in auto"
  },
  "parking": {
      "mainAreas": [
          {
              "name": "Nome Parcheggio",
              "type": "Coperto / Scoperto",
              "capacity": "Posti stimati",
              "price": "Gratis / A pagamento",
              "distance": "Distanza da impianti/centro",
              "features": ["EV charging", "Navetta", "Accessibile camper"]
          }
      ],
      "tips": "Consigli su dove parcheggiare per spendere meno o essere comodi"
  },
  "localMobility": {
      "skiBus": "Gratuito/Pagamento, frequenza",
      "connections": "Collegamenti parcheggi-impianti",
      "carFreeZones": "ZTL o aree pedonali",
      "nightMobility": "Servizi serali"
  },
  "infoPoints": {
      "locations": ["Posizione ufficio 1", "Posizione ufficio 2"],
      "hours": "Orari indicativi",
      "languages": "Lingue parlate",
      "services": ["Skipass", "Mappe", "Prenotazioni"]
  },
  "medical": {
      "pharmacies": "Nomi e orari indicativi",
      "nearestHospital": "Ospedale più vicino (km e tempo)",
      "emergencies": "Soccorso alpino, guardia medica"
  },
  "advancedSkiing": {
      "slopesPercent": { "blue": "0%", "red": "0%", "black": "0%" },
      "crowdLevel": "Basso / Medio / Alto",
      "snowMaking": "Descrizione impianto innevamento",
      "connections": "Collegamenti comprensori limitrofi"
  },
  "outdoorNonSki": {
      "activities": ["Attività 1", "Attività 2"],
      "iconicTreks": ["Sentiero 1", "Sentiero 2"],
      "wellness": "Terme e SPA"
  },
  "family": {
      "kindergartens": "Asili neve, baby club",
      "kidsSlopes": "Aree campo scuola",
      "facilities": "Aree gioco indoor, passeggini",
      "rating": "Voto 1-10 per famiglie"
  },
  "rentals": {
      "types": ["Sci", "Snowboard", "E-bike"],
      "services": ["Deposito riscaldato", "Boot fitting"],
      "prices": "Range di prezzo medio",
      "tips": "Consigli su prenotazione"
  },
  "eventsAndSeasonality": {
      "topEvents": ["Evento 1", "Evento 2"],
      "seasonTips": "Consigli periodi"
  },
  "gastronomy": {
      "typicalDishes": ["Piatto 1", "Piatto 2"],
      "topDining": "Ristoranti top",
      "localProducts": ["Prodotto 1", "Prodotto 2"]
  },
  "digital": {
      "app": "App ufficiale",
      "wifi": "Copertura WiFi pubblico",
      "remoteWork": "Spazi coworking o hotel friendly"
  },
  "practicalTips": {
      "crowds": "Periodi di maggior affollamento",
      "bestTimes": "Quando andare per evitare code",
      "criticalIssues": "Vento forte, strade ghiacciate, code rientro"
  },
  "openingHours": {
      "lifts": "Orari standard impianti",
      "shops": "Orari negozi",
      "restaurants": "Orari cucina (pranzo/cena)"
  },
  "safety": {
      "rules": "Obbligo casco, regole specifiche",
      "dronePolicy": "Regolamento droni"
  },
  "sustainability": {
      "energy": "Impianti green",
      "mobility": "Progetti mobilità",
      "certifications": "Certificazioni"
  }
}
All details must be in Italian.

ISTRUZIONI:
Assicurati di compilare TUTTI i campi. Se un'informazione specifica non è disponibile, fornisci una stima basata sulla tipologia di località (es. 'Standard per località alpine' o 'Non specificato ufficialmente').
Focalizzati su dettagli pratici che aiutano l'utente a pianificare (es. prezzi parcheggi, orari bus).

Assicurati assolutamente di:
1. Chiudere tutte le stringhe, le parentesi graffe e le parentesi quadre.
2. Usare la virgola separatrice tra tutti gli elementi di liste e oggetti.
3. Effettuare l'escaping corretto delle virgolette doppie all'interno delle stringhe (es. \").
4. Non aggiungere commenti (// o /* */) nel JSON.

Rispondi SOLO con JSON valido. Niente markdown, niente blocchi di codice."#;

const TRANSLATED_SYSTEM: &str = r#"Sei un analista turistico esperto di montagna, incaricato di redigere un report dettagliato e completo su una specifica località per un comparatore turistico avanzato.

Struttura JSON richiesta in output:
{
  "version": "v1.2.0",
  "name": "Nome Località",
  "description": {
     "winter": "In-depth description of the winter offer...",
     "summer": "In-depth description of the summer offer...",
     "autumn": "Description of the autumn offer...",
     "spring": "Description of the spring offer..."
  },
  "seasonalImages": {
    "winter": "URL or winter image description",
    "summer": "URL or summer image description",
    "autumn": "URL or autumn image description",
    "spring": "URL or spring image description"
  },
  "services": [
    {
      "name": "Service name (e.g. Funivia Marmolada, Hotel Bellavista)",
      "category": "tourism|accommodation|infrastructure|essential|sport|info|general",
      "description": "RICH description. Include opening hours, indicative prices, technical data (e.g. vertical drop, slope length, hotel stars).",
      "seasonAvailability": ["winter", "summer"]
    }
  ],
  "tags": {
     "vibe": ["relax", "sport", "party", "luxury", "nature"],
     "target": ["family", "couple", "friends", "solo"],
     "activities": ["ski", "hiking", "wellness", "food", "culture"],
     "highlights": ["Highlight 1", "Highlight 2"],
     "tourism": ["Tourism tag 1", "Tourism tag 2"],
     "sport": ["Sport tag 1", "Sport tag 2"],
     "accommodation": ["Accommodation tag 1", "Accommodation tag 2"],
     "infrastructure": ["Infrastructure tag 1", "Infrastructure tag 2"],
     "info": ["Info tag 1", "Info tag 2"],
     "general": ["General tag 1", "General tag 2"]
  },
  "technicalData": {
      "totalSkiKm": 0,
      "minAltitude": 0,
      "maxAltitude": 0,
      "totalLifts": 0
  },
  "accessibility": {
      "airports": ["Airport 1 (distance)", "Airport 2 (distance)"],
      "train": "Station and connections",
      "car": "Road access, critical passes",
      "accessToResort": "Arrival-by-car specifics"
  }
}
All non-key content must be in English.

IMPORTANT: for the "tags" section use ONLY the following IDs (lowercase) where applicable:
- vibe: relax, sport, party, luxury, nature, tradition, work, silence
- target: family, couple, friends, solo
- activities: ski, hiking, wellness, food, culture, adrenaline, shopping, photography
- country: use ONLY "Italy", "Austria", "Switzerland", or "France"

IMPORTANTE:
1. Compila PRIMA le descrizioni per TUTTE le 4 stagioni (inverno, primavera, estate, autunno).
2. Poi elenca una lista ESTESA di servizi specifici con descrizioni dettagliate.

Rispondi SOLO con JSON valido. Niente markdown, niente blocchi di codice."#;

/// Build the full-report prompt for the given variant.
pub fn build(
    variant: ReportVariant,
    location_name: &str,
    region: Option<&str>,
    targets: &[String],
    user_instructions: Option<&str>,
) -> String {
    let system = match variant {
        ReportVariant::Minimal => MINIMAL_SYSTEM,
        ReportVariant::Extended => EXTENDED_SYSTEM,
        ReportVariant::Translated => TRANSLATED_SYSTEM,
    };

    let mut user = String::new();
    user.push_str("Analizza la località: ");
    user.push_str(location_name);
    if let Some(region) = region {
        user.push_str(" (");
        user.push_str(region);
        user.push(')');
    }
    user.push_str(".\n");
    if !targets.is_empty() {
        user.push_str("Obiettivi di ricerca: ");
        user.push_str(&targets.join(", "));
        user.push_str(".\n");
    }
    user.push_str(user_instructions.unwrap_or("Estrai il report completo."));

    format!("{system}\n\n{user}")
}
