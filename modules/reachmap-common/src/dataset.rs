//! The coverage dataset catalog. Every per-dataset behavior in the
//! application is driven by this table rather than per-dataset code paths.

use serde::{Deserialize, Serialize};

/// The three coverage datasets rendered as choropleth overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    Internet,
    FiveG,
    ThreeG,
}

impl Dataset {
    pub const ALL: [Dataset; 3] = [Dataset::Internet, Dataset::FiveG, Dataset::ThreeG];

    /// Stable identifier used in logs and config.
    pub fn key(&self) -> &'static str {
        match self {
            Dataset::Internet => "internet",
            Dataset::FiveG => "5g",
            Dataset::ThreeG => "3g",
        }
    }

    /// Path of the GeoJSON resource relative to the dataset host.
    pub fn resource_path(&self) -> &'static str {
        match self {
            Dataset::Internet => "data/Final-Woldmap.geojson",
            Dataset::FiveG => "data/5g_map.geojson",
            Dataset::ThreeG => "data/3g_final_map.geojson",
        }
    }

    /// Feature property holding this dataset's coverage percentage.
    pub fn property_key(&self) -> &'static str {
        match self {
            Dataset::Internet => "daten_neu_2023",
            Dataset::FiveG => "5g_Column24",
            Dataset::ThreeG => "3g_final_Column35",
        }
    }

    /// Human-readable metric name used in popups.
    pub fn metric_label(&self) -> &'static str {
        match self {
            Dataset::Internet => "Internet users",
            Dataset::FiveG => "5G coverage",
            Dataset::ThreeG => "3G coverage",
        }
    }

    /// Checkbox title in the overlay control.
    pub fn overlay_title(&self) -> &'static str {
        match self {
            Dataset::Internet => "Internet users (choropleth)",
            Dataset::FiveG => "5G coverage (choropleth)",
            Dataset::ThreeG => "3G coverage (choropleth)",
        }
    }

    /// The primary dataset is shown as soon as it loads and its completion
    /// creates the overlay control.
    pub fn is_primary(&self) -> bool {
        matches!(self, Dataset::Internet)
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_complete_and_distinct() {
        for ds in Dataset::ALL {
            assert!(!ds.resource_path().is_empty());
            assert!(!ds.property_key().is_empty());
            assert!(!ds.metric_label().is_empty());
            assert!(ds.overlay_title().contains("choropleth"));
        }
        let keys: Vec<_> = Dataset::ALL.iter().map(|d| d.property_key()).collect();
        assert_eq!(keys.len(), 3);
        assert!(keys.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn internet_is_the_only_primary() {
        let primaries: Vec<_> = Dataset::ALL.into_iter().filter(|d| d.is_primary()).collect();
        assert_eq!(primaries, vec![Dataset::Internet]);
    }

    #[test]
    fn property_keys_match_the_source_data() {
        assert_eq!(Dataset::Internet.property_key(), "daten_neu_2023");
        assert_eq!(Dataset::FiveG.property_key(), "5g_Column24");
        assert_eq!(Dataset::ThreeG.property_key(), "3g_final_Column35");
    }
}
