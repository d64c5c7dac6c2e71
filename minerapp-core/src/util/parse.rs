use std::num::ParseFloatError;

use crate::entities::Location;

/// Builds coordinates from form values.
///
/// Both values are required, otherwise no location is returned.
/// Unparsable numbers are reported as an error.
pub fn parse_location(
    lat: Option<&str>,
    lng: Option<&str>,
) -> Result<Option<Location>, ParseFloatError> {
    let lat = lat.map(str::trim).filter(|s| !s.is_empty());
    let lng = lng.map(str::trim).filter(|s| !s.is_empty());
    match (lat, lng) {
        (Some(lat), Some(lng)) => {
            let lat = lat.parse::<f64>()?;
            let lng = lng.parse::<f64>()?;
            Ok(Some(Location { lat, lng }))
        }
        _ => Ok(None),
    }
}

/// Flattens repeated and comma separated tag values.
pub fn split_tags<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    values
        .into_iter()
        .flat_map(|v| v.split(','))
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty())
        .collect()
}
