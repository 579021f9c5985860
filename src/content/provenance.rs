//! Simulated data lineage shown on attribute pages.

use crate::names::first_keyword_match;

/// Where an attribute's values are said to come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub system: &'static str,
    pub source_type: &'static str,
    pub entity: &'static str,
    pub refresh: &'static str,
}

const fn provenance(
    system: &'static str,
    source_type: &'static str,
    entity: &'static str,
    refresh: &'static str,
) -> Provenance {
    Provenance {
        system,
        source_type,
        entity,
        refresh,
    }
}

fn group(
    keywords: &'static [&'static str],
    provenance: Provenance,
) -> (&'static [&'static str], Provenance) {
    (keywords, provenance)
}

/// Keyword groups checked in order against the lowercased attribute name
#[derive(Debug, Clone)]
pub struct ProvenanceTable {
    rules: Vec<(&'static [&'static str], Provenance)>,
    fallback: Provenance,
}

impl ProvenanceTable {
    pub fn builtin() -> Self {
        Self {
            rules: vec![
                group(
                    &["weather", "temp", "wind", "visibility", "qnh", "rvr"],
                    provenance("Met Office API", "External", "METAR/TAF Service", "Hourly"),
                ),
                group(
                    &["passenger", "ticket", "surname", "name", "seat", "bag", "loyalty"],
                    provenance("Amadeus DCS", "External", "PNR_Record", "Real-time"),
                ),
                group(
                    &["flight", "route", "aircraft", "tail", "fuel", "crew"],
                    provenance(
                        "AODB (Airport Ops DB)",
                        "Internal",
                        "FLIGHT_OPS_DAILY",
                        "Real-time",
                    ),
                ),
                group(
                    &["runway", "gate", "belt", "stand", "terminal", "lounge"],
                    provenance(
                        "Airport BMS / Tower",
                        "Internal",
                        "INFRA_STATUS_REALTIME",
                        "Real-time",
                    ),
                ),
                group(
                    &["price", "fare", "cost", "revenue"],
                    provenance("SAP ERP", "Internal", "FI_CO_PA", "Daily"),
                ),
            ],
            fallback: provenance("Data Lake", "Internal", "RAW_INGESTION_LAYER", "Daily"),
        }
    }

    pub fn lookup(&self, name: &str) -> &Provenance {
        let lowered = name.to_lowercase();
        first_keyword_match(&lowered, self.rules.iter().map(|(keys, p)| (*keys, p)))
            .map(|(_, p)| p)
            .unwrap_or(&self.fallback)
    }
}
