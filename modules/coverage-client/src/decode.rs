//! GeoJSON to domain-layer decoding.

use geojson::{Feature, FeatureCollection, Value};
use serde_json::Value as Json;
use tracing::debug;

use reachmap_common::dataset::Dataset;
use reachmap_common::types::{CoverageFeature, CoverageLayer, GeoPoint, Polygon, Ring};

const NAME_PROPERTY: &str = "NAME";

/// Decode a fetched feature collection into a coverage layer.
///
/// Property problems never fail a feature: a missing name gets a
/// placeholder and a missing or non-numeric value becomes NaN. Features
/// without polygonal geometry are skipped.
pub fn decode_layer(dataset: Dataset, collection: FeatureCollection) -> CoverageLayer {
    let mut features = Vec::with_capacity(collection.features.len());
    let mut skipped = 0usize;

    for feature in collection.features {
        match decode_feature(dataset, &feature) {
            Some(decoded) => features.push(decoded),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(dataset = %dataset, skipped, "Skipped features without polygonal geometry");
    }
    CoverageLayer::new(dataset, features)
}

fn decode_feature(dataset: Dataset, feature: &Feature) -> Option<CoverageFeature> {
    let polygons: Vec<Polygon> = match feature.geometry.as_ref().map(|g| &g.value) {
        Some(Value::Polygon(rings)) => decode_polygon(rings).into_iter().collect(),
        Some(Value::MultiPolygon(polygons)) => {
            polygons.iter().filter_map(|p| decode_polygon(p)).collect()
        }
        _ => return None,
    };
    if polygons.is_empty() {
        return None;
    }

    let name = feature
        .properties
        .as_ref()
        .and_then(|props| props.get(NAME_PROPERTY))
        .and_then(Json::as_str)
        .unwrap_or("Unknown region")
        .to_string();
    let value = coverage_value(feature.properties.as_ref(), dataset.property_key());

    Some(CoverageFeature {
        name,
        value,
        polygons,
    })
}

/// First ring is the exterior, the rest are holes.
fn decode_polygon(rings: &[Vec<Vec<f64>>]) -> Option<Polygon> {
    let mut rings = rings.iter().map(|ring| decode_ring(ring));
    let exterior = rings.next()?;
    let holes = rings.collect();
    Some(Polygon { exterior, holes })
}

/// GeoJSON positions are [longitude, latitude].
fn decode_ring(ring: &[Vec<f64>]) -> Ring {
    ring.iter()
        .filter(|position| position.len() >= 2)
        .map(|position| GeoPoint::new(position[1], position[0]))
        .collect()
}

/// Coerce a feature property to a number the way the map expects: numbers
/// pass through, numeric strings parse, everything else is NaN.
pub fn coverage_value(properties: Option<&geojson::JsonObject>, key: &str) -> f64 {
    match properties.and_then(|props| props.get(key)) {
        Some(Json::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Json::String(s)) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::GeoJson;

    fn collection(json: &str) -> FeatureCollection {
        match json.parse::<GeoJson>().expect("test JSON must parse") {
            GeoJson::FeatureCollection(fc) => fc,
            other => panic!("expected a FeatureCollection, got {other:?}"),
        }
    }

    fn one_country(properties: &str) -> CoverageFeature {
        let json = format!(
            r#"{{
                "type": "FeatureCollection",
                "features": [{{
                    "type": "Feature",
                    "properties": {properties},
                    "geometry": {{
                        "type": "Polygon",
                        "coordinates": [[[5.0, 52.0], [6.0, 52.0], [6.0, 53.0], [5.0, 52.0]]]
                    }}
                }}]
            }}"#
        );
        let layer = decode_layer(Dataset::Internet, collection(&json));
        assert_eq!(layer.features.len(), 1);
        layer.features.into_iter().next().unwrap()
    }

    #[test]
    fn numeric_property_passes_through() {
        let f = one_country(r#"{"NAME": "Netherlands", "daten_neu_2023": 92}"#);
        assert_eq!(f.name, "Netherlands");
        assert_eq!(f.value, 92.0);
    }

    #[test]
    fn numeric_string_parses() {
        let f = one_country(r#"{"NAME": "Netherlands", "daten_neu_2023": " 92.5 "}"#);
        assert_eq!(f.value, 92.5);
    }

    #[test]
    fn missing_or_junk_values_become_nan() {
        assert!(one_country(r#"{"NAME": "X"}"#).value.is_nan());
        assert!(one_country(r#"{"NAME": "X", "daten_neu_2023": null}"#)
            .value
            .is_nan());
        assert!(one_country(r#"{"NAME": "X", "daten_neu_2023": "n/a"}"#)
            .value
            .is_nan());
        assert!(one_country(r#"{"NAME": "X", "daten_neu_2023": true}"#)
            .value
            .is_nan());
    }

    #[test]
    fn missing_name_gets_a_placeholder() {
        let f = one_country(r#"{"daten_neu_2023": 10}"#);
        assert_eq!(f.name, "Unknown region");
    }

    #[test]
    fn positions_decode_as_lat_lng() {
        let f = one_country(r#"{"NAME": "X", "daten_neu_2023": 1}"#);
        let first = f.polygons[0].exterior[0];
        assert_eq!(first.lat, 52.0);
        assert_eq!(first.lng, 5.0);
    }

    #[test]
    fn multipolygon_keeps_every_part_and_holes() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"NAME": "Archipelago", "daten_neu_2023": 40},
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [
                            [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 0.0]],
                            [[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 1.0]]
                        ],
                        [
                            [[10.0, 10.0], [11.0, 10.0], [11.0, 11.0], [10.0, 10.0]]
                        ]
                    ]
                }
            }]
        }"#;
        let layer = decode_layer(Dataset::Internet, collection(json));
        let f = &layer.features[0];
        assert_eq!(f.polygons.len(), 2);
        assert_eq!(f.polygons[0].holes.len(), 1);
        assert!(f.polygons[1].holes.is_empty());
    }

    #[test]
    fn non_polygon_features_are_skipped() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"NAME": "A point"},
                    "geometry": {"type": "Point", "coordinates": [5.0, 52.0]}
                },
                {
                    "type": "Feature",
                    "properties": {"NAME": "No geometry"},
                    "geometry": null
                }
            ]
        }"#;
        let layer = decode_layer(Dataset::FiveG, collection(json));
        assert!(layer.features.is_empty());
    }

    #[test]
    fn dataset_key_selects_the_property() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"NAME": "X", "daten_neu_2023": 90, "5g_Column24": 10},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
                }
            }]
        }"#;
        let internet = decode_layer(Dataset::Internet, collection(json));
        let five_g = decode_layer(Dataset::FiveG, collection(json));
        assert_eq!(internet.features[0].value, 90.0);
        assert_eq!(five_g.features[0].value, 10.0);
    }
}
