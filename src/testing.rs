//! Testing utilities for tablr
//!
//! Canned datasets and column sets shared by unit and integration tests.
//! The accession dataset mirrors the shape the engine was designed around:
//! germplasm accession rows with coordinates, origin country and a link
//! column, including sparsely populated cells.
//!
//! Only available when compiled with `cfg(test)`.

use crate::columns::{ColumnSet, ColumnSpec, DisplayToken};
use crate::{CellValue, Record};

/// One accession row: number, coordinates, country, distances, comment, link
type AccessionRow = (
    &'static str,
    Option<f64>,
    f64,
    &'static str,
    f64,
    Option<&'static str>,
    &'static str,
);

const ACCESSIONS: [AccessionRow; 25] = [
    ("PI 1201", Some(-12.05), -77.04, "Peru", 14.2, None, "GRIN-1201"),
    ("PI 1202", Some(-13.52), -71.97, "Peru", 3.8, None, "GRIN-1202"),
    ("PI 1203", Some(-9.19), -75.02, "Peru", 21.0, Some("duplicate record"), "GRIN-1203"),
    ("PI 1204", Some(-13.52), -72.51, "Peru", 8.4, None, "GRIN-1204"),
    ("PI 1205", None, -76.24, "Peru", 5.1, None, "GRIN-1205"),
    ("PI 1301", Some(-16.49), -68.12, "Bolivia", 2.3, None, "GRIN-1301"),
    ("PI 1302", Some(-17.38), -66.16, "Bolivia", 11.8, None, "GRIN-1302"),
    ("PI 1303", Some(-19.04), -65.26, "Bolivia", 7.7, None, "GRIN-1303"),
    ("PI 1304", Some(-16.49), -64.73, "Bolivia", 30.5, None, "GRIN-1304"),
    ("PI 1305", Some(-21.53), -64.73, "Bolivia", 1.1, None, "GRIN-1305"),
    ("PI 1306", Some(-14.83), -64.90, "Bolivia", 16.6, None, "GRIN-1306"),
    ("PI 1307", None, -68.15, "Bolivia", 9.9, None, "GRIN-1307"),
    ("PI 1308", Some(-17.97), -67.11, "Bolivia", 4.4, None, "GRIN-1308"),
    ("PI 1309", Some(-18.47), -70.30, "Bolivia", 13.0, None, "GRIN-1309"),
    ("PI 1310", Some(-15.59), -68.69, "Bolivia", 26.2, None, "GRIN-1310"),
    ("PI 1311", Some(-20.45), -66.83, "Bolivia", 6.5, None, "GRIN-1311"),
    ("PI 1312", Some(-16.29), -63.59, "Bolivia", 18.9, None, "GRIN-1312"),
    ("PI 1401", Some(-33.45), -70.66, "Chile", 12.7, None, "GRIN-1401"),
    ("PI 1402", Some(-36.82), -73.05, "Chile", 22.4, None, "GRIN-1402"),
    ("PI 1403", Some(-29.91), -71.25, "Chile", 0.9, None, "GRIN-1403"),
    ("PI 1501", Some(19.43), -99.13, "Mexico", 5.6, None, "GRIN-1501"),
    ("PI 1502", Some(20.67), -103.35, "Mexico", 10.3, None, "GRIN-1502"),
    ("PI 1503", Some(25.69), -100.32, "Mexico", 7.2, None, "GRIN-1503"),
    ("PI 1601", Some(-15.78), -47.93, "Brazil", 19.5, None, "GRIN-1601"),
    ("PI 1602", Some(-23.55), -46.63, "Brazil", 2.8, None, "GRIN-1602"),
];

/// Accession dataset: 25 rows, 5 from Peru, 12 from Bolivia, two rows with
/// a missing latitude, one row with a comment
#[must_use]
pub fn country_records() -> Vec<Record> {
    ACCESSIONS
        .iter()
        .map(|&(accenumb, latitude, longitude, country, distance, commets, grin)| {
            let mut record = Record::new();
            record.push("ACCENUMB", CellValue::from(accenumb));
            record.push(
                "DECLATITUDE",
                latitude.map_or(CellValue::Missing, CellValue::Number),
            );
            record.push("DECLONGITUDE", CellValue::Number(longitude));
            record.push("ORIGCTY", CellValue::from(country));
            record.push("Distance", CellValue::Number(distance));
            record.push(
                "COMMETS",
                commets.map_or(CellValue::Missing, CellValue::from),
            );
            record.push("GRIN", CellValue::from(grin));
            record
        })
        .collect()
}

/// Column set matching `country_records`, with the link column excluded
/// from sorting and rendered through a hook
#[must_use]
pub fn country_columns() -> ColumnSet {
    ColumnSet::new(vec![
        ColumnSpec::new("ACCENUMB"),
        ColumnSpec::new("DECLATITUDE"),
        ColumnSpec::new("DECLONGITUDE"),
        ColumnSpec::new("ORIGCTY"),
        ColumnSpec::new("Distance"),
        ColumnSpec::new("COMMETS"),
        ColumnSpec::new("GRIN")
            .not_sortable()
            .with_render(|value| DisplayToken::styled(value.to_string(), "link")),
    ])
}

/// Simple numbered dataset: `id` 1..=count and a `name` cell
#[must_use]
pub fn numbered_records(count: usize) -> Vec<Record> {
    (1..=count)
        .map(|i| {
            let mut record = Record::new();
            #[allow(clippy::cast_possible_wrap)]
            record.push("id", CellValue::from(i as i64));
            record.push("name", CellValue::from(format!("row {i:02}")));
            record
        })
        .collect()
}

/// All row indices of a dataset, in natural order
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn all_rows(records: &[Record]) -> Vec<u32> {
    (0..records.len() as u32).collect()
}
