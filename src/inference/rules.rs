//! Built-in inference rules for the airline operations dictionary.

use crate::models::DataType;

use super::fragment::SchemaFragment;

/// Fragment for one exact canonical key
#[derive(Debug, Clone)]
pub struct ExactRule {
    pub key: &'static str,
    pub fragment: SchemaFragment,
}

/// Fragment for any key containing one of `keywords`
#[derive(Debug, Clone)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub fragment: SchemaFragment,
}

fn exact(key: &'static str, fragment: SchemaFragment) -> ExactRule {
    ExactRule { key, fragment }
}

fn keywords(keywords: &'static [&'static str], fragment: SchemaFragment) -> KeywordRule {
    KeywordRule { keywords, fragment }
}

fn airport_code(example: &str, description: &str) -> SchemaFragment {
    SchemaFragment::new(DataType::String)
        .format("^[A-Z]{3}$")
        .length(Some(3), 3)
        .example(example)
        .described(description)
}

fn ticket_number() -> SchemaFragment {
    SchemaFragment::new(DataType::String)
        .format("^[0-9]{13}$")
        .length(Some(13), 13)
        .example("1762345678901")
        .described("13-digit unique ticket number.")
}

pub(super) fn builtin_exact() -> Vec<ExactRule> {
    vec![
        exact(
            "iata-designator",
            SchemaFragment::new(DataType::String)
                .format("^[A-Z0-9]{2}$")
                .length(Some(2), 2)
                .example("LH")
                .described("Two-character alphanumeric code assigned by IATA to the airline."),
        ),
        exact(
            "icao-indicator",
            SchemaFragment::new(DataType::String)
                .format("^[A-Z]{3}$")
                .length(Some(3), 3)
                .example("DLH")
                .described("Three-letter code assigned by ICAO to the airline."),
        ),
        exact(
            "airport-code-iata",
            airport_code("LHR", "Three-letter IATA airport code."),
        ),
        exact(
            "flight-status",
            SchemaFragment::new(DataType::Enum)
                .values(&[
                    ("Scheduled", "Flight is planned."),
                    ("Active", "Flight is currently in the air."),
                    ("Landed", "Flight has arrived."),
                    ("Cancelled", "Flight has been cancelled."),
                    ("Delayed", "Flight is delayed."),
                ])
                .example("Active")
                .described("Current operational status of the flight."),
        ),
        exact(
            "operating-status",
            SchemaFragment::new(DataType::Enum)
                .values(&[
                    ("Normal", "Operating normally."),
                    ("Closed", "Temporarily closed."),
                    ("Restricted", "Operating with restrictions."),
                ])
                .example("Normal"),
        ),
        // Both spellings occur in existing corpora; keep them as separate entries.
        exact("ticketnumber", ticket_number()),
        exact("ticket-number", ticket_number()),
        exact(
            "qnh",
            SchemaFragment::new(DataType::Integer)
                .unit("hPa")
                .min(900)
                .max(1100)
                .example(1013)
                .described("Atmospheric pressure adjusted to sea level."),
        ),
        exact(
            "notams",
            SchemaFragment::new(DataType::String)
                .length(None, 1000)
                .example("RWY 27 CLSD DUE WX")
                .described("Notice to Airmen - important flight information."),
        ),
        exact(
            "delays",
            SchemaFragment::new(DataType::Integer)
                .unit("minutes")
                .min(0)
                .example(45)
                .described("Flight delay duration in minutes."),
        ),
        exact(
            "flight-aircraft-tailnumber",
            SchemaFragment::new(DataType::String)
                .format("^[A-Z0-9-]{5,10}$")
                .length(Some(5), 10)
                .example("N12345")
                .described("Aircraft registration/tail number."),
        ),
        exact(
            "active-runway-configuration",
            SchemaFragment::new(DataType::String)
                .format("^[0-9]{2}[LCR]?$")
                .length(Some(2), 3)
                .example("27L")
                .described("Active runway designation (e.g., 27L for left runway)."),
        ),
        exact(
            "nearest-lounge",
            SchemaFragment::new(DataType::String)
                .length(None, 100)
                .example("Platinum Lounge - Terminal A")
                .described("Name/location of the nearest passenger lounge."),
        ),
        exact(
            "flight-route",
            SchemaFragment::new(DataType::String)
                .length(None, 500)
                .example("JFK-LAX-SFO")
                .described("Flight route as sequence of airport codes."),
        ),
        exact(
            "hvac-status",
            SchemaFragment::new(DataType::Enum)
                .values(&[
                    ("Normal", "HVAC operating normally."),
                    ("Maintenance", "HVAC under maintenance."),
                    ("Fault", "HVAC system fault."),
                ])
                .example("Normal")
                .described("Heating, ventilation, and air conditioning status."),
        ),
        exact(
            "current-weather",
            SchemaFragment::new(DataType::String)
                .length(None, 200)
                .example("Clear skies, 22°C, wind 5kt from 270°")
                .described("Current weather conditions summary."),
        ),
        exact(
            "arrival-airport",
            airport_code("LAX", "IATA code of the arrival airport."),
        ),
        exact(
            "crewmanifest",
            SchemaFragment::new(DataType::String)
                .length(None, 1000)
                .example("Captain: John Smith, First Officer: Jane Doe, Flight Attendants: 4")
                .described("List of crew members assigned to the flight."),
        ),
        exact(
            "departure-airport",
            airport_code("JFK", "IATA code of the departure airport."),
        ),
    ]
}

pub(super) fn builtin_keywords() -> Vec<KeywordRule> {
    vec![
        keywords(
            &["time", "date", "schedule"],
            SchemaFragment::new(DataType::DateTime)
                .format("ISO 8601")
                .example("2023-10-25T14:30:00Z")
                .described("Timestamp in UTC."),
        ),
        keywords(
            &["count", "passengers", "seats"],
            SchemaFragment::new(DataType::Integer).min(0).example(150),
        ),
        keywords(
            &["weight", "load"],
            SchemaFragment::new(DataType::Decimal)
                .unit("kg")
                .precision(2)
                .min(0.0)
                .example(23.5),
        ),
        keywords(
            &["distance", "range", "length"],
            SchemaFragment::new(DataType::Decimal)
                .unit("km")
                .precision(1)
                .min(0.0)
                .example(1500.0),
        ),
        keywords(
            &["temperature"],
            SchemaFragment::new(DataType::Decimal)
                .unit("Celsius")
                .precision(1)
                .example(21.5),
        ),
        keywords(
            &["speed", "velocity"],
            SchemaFragment::new(DataType::Integer)
                .unit("knots")
                .min(0)
                .example(450),
        ),
        keywords(
            &["price", "cost", "fare"],
            SchemaFragment::new(DataType::Decimal)
                .unit("USD")
                .precision(2)
                .min(0.0)
                .example(199.99),
        ),
        keywords(
            &["id", "code"],
            SchemaFragment::new(DataType::String)
                .length(Some(1), 50)
                .example("ID-12345"),
        ),
        keywords(
            &["name", "surname"],
            SchemaFragment::new(DataType::String)
                .length(Some(1), 100)
                .example("John Doe"),
        ),
        keywords(
            &["description", "note", "comment"],
            SchemaFragment::new(DataType::String)
                .length(None, 500)
                .example("Sample text description."),
        ),
        keywords(
            &["percent", "progress", "rate"],
            SchemaFragment::new(DataType::Decimal)
                .unit("%")
                .min(0)
                .max(100)
                .example(75.5),
        ),
    ]
}
