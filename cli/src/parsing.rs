use crate::error::IngestError;
use crate::string_normalization::{clean_str, split_list};
use serde::Serialize;
use std::path::Path;

pub const EXPECTED_FIELDS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Band {
    pub name: String,
    pub fans: f64,
    pub year: i64,
    pub countries: Vec<String>,
    pub genres: Vec<String>,
}

pub fn read_catalog(catalog_path: &Path) -> Result<Vec<Band>, IngestError> {
    let contents = std::fs::read_to_string(catalog_path).map_err(|source| IngestError::Io {
        path: catalog_path.to_path_buf(),
        source,
    })?;
    parse_catalog(&contents)
}

/// Parses `name,fans,year,countries,genres` rows. The first line is a header.
pub fn parse_catalog(contents: &str) -> Result<Vec<Band>, IngestError> {
    contents
        .lines()
        .enumerate()
        .skip(1)
        .filter(|(_, row)| !row.trim().is_empty())
        .map(|(index, row)| parse_band_row(index + 1, row))
        .collect()
}

fn parse_band_row(line: usize, row: &str) -> Result<Band, IngestError> {
    let fields: Vec<&str> = row.split(',').map(str::trim).collect();
    if fields.len() < EXPECTED_FIELDS {
        return Err(IngestError::MissingField {
            line,
            expected: EXPECTED_FIELDS,
            found: fields.len(),
        });
    }

    let name = clean_str(fields[0]);
    if name.is_empty() {
        return Err(IngestError::EmptyName { line });
    }

    Ok(Band {
        name,
        fans: parse_number(line, "fans", fields[1])?,
        year: parse_number(line, "year", fields[2])?,
        countries: split_list(fields[3]),
        genres: split_list(fields[4]),
    })
}

fn parse_number<N: std::str::FromStr>(
    line: usize,
    field: &'static str,
    value: &str,
) -> Result<N, IngestError> {
    value.parse().map_err(|_| IngestError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}
