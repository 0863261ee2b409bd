//! Seven-bucket color scale shared by every choropleth style function.

/// One interval of the scale: values above `floor` (up to the next bucket's
/// floor) map to `color`. The lowest bucket also absorbs everything below
/// its floor, including NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBucket {
    pub floor: f64,
    pub color: &'static str,
}

/// Bucket table ordered by ascending floor. The highest bucket is unbounded
/// above.
pub const COLOR_BUCKETS: [ColorBucket; 7] = [
    ColorBucket { floor: 0.0, color: "#f2e6b8" },
    ColorBucket { floor: 15.0, color: "#c7e9b4" },
    ColorBucket { floor: 30.0, color: "#7fcdbb" },
    ColorBucket { floor: 45.0, color: "#41b6c4" },
    ColorBucket { floor: 60.0, color: "#1d91c0" },
    ColorBucket { floor: 75.0, color: "#225ea8" },
    ColorBucket { floor: 90.0, color: "#0c2c84" },
];

/// Map a coverage percentage to its bucket color.
///
/// Total over all f64 inputs: NaN and values at or below zero compare false
/// against every floor and land in the lowest bucket.
pub fn color_for(value: f64) -> &'static str {
    COLOR_BUCKETS
        .iter()
        .rev()
        .find(|bucket| value > bucket.floor)
        .map(|bucket| bucket.color)
        .unwrap_or(COLOR_BUCKETS[0].color)
}

/// One legend row: a swatch color and its numeric range label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub color: &'static str,
    pub label: String,
}

/// Legend rows for the static legend panel, lowest bucket first. The
/// terminal row is open-ended ("90+").
pub fn legend_entries() -> Vec<LegendEntry> {
    COLOR_BUCKETS
        .iter()
        .enumerate()
        .map(|(i, bucket)| {
            let label = match COLOR_BUCKETS.get(i + 1) {
                Some(next) => format!("{}\u{2013}{}", bucket.floor, next.floor),
                None => format!("{}+", bucket.floor),
            };
            LegendEntry {
                color: color_for(bucket.floor + 1.0),
                label,
            }
        })
        .collect()
}

/// Parse a `#rrggbb` hex code into RGB components.
pub fn hex_to_rgb(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.strip_prefix('#')?;
    // Byte length alone would let a multibyte char through to the slicing.
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket_index(color: &str) -> usize {
        COLOR_BUCKETS
            .iter()
            .position(|b| b.color == color)
            .expect("color_for returned a color outside the bucket table")
    }

    #[test]
    fn every_input_maps_into_the_table() {
        let mut v = -20.0;
        while v < 120.0 {
            bucket_index(color_for(v));
            v += 0.5;
        }
        bucket_index(color_for(f64::NAN));
        bucket_index(color_for(f64::INFINITY));
        bucket_index(color_for(f64::NEG_INFINITY));
    }

    #[test]
    fn severity_is_monotonic_across_thresholds() {
        let samples = [-5.0, 0.0, 10.0, 16.0, 31.0, 46.0, 61.0, 76.0, 91.0, 100.0];
        let mut last = 0;
        for v in samples {
            let idx = bucket_index(color_for(v));
            assert!(idx >= last, "severity dropped at {v}");
            last = idx;
        }
    }

    #[test]
    fn nan_and_negative_fall_into_lowest_bucket() {
        assert_eq!(color_for(f64::NAN), "#f2e6b8");
        assert_eq!(color_for(-5.0), "#f2e6b8");
        assert_eq!(color_for(0.0), "#f2e6b8");
    }

    #[test]
    fn thresholds_are_exclusive_lower_bounds() {
        assert_eq!(color_for(90.0), "#225ea8");
        assert_eq!(color_for(90.1), "#0c2c84");
        assert_eq!(color_for(15.0), "#f2e6b8");
        assert_eq!(color_for(15.1), "#c7e9b4");
    }

    #[test]
    fn ninety_two_maps_to_the_top_bucket() {
        assert_eq!(color_for(92.0), "#0c2c84");
    }

    #[test]
    fn legend_covers_every_bucket_in_order() {
        let entries = legend_entries();
        assert_eq!(entries.len(), COLOR_BUCKETS.len());
        for (entry, bucket) in entries.iter().zip(COLOR_BUCKETS.iter()) {
            assert_eq!(entry.color, bucket.color);
        }
        assert_eq!(entries[0].label, "0\u{2013}15");
        assert_eq!(entries.last().unwrap().label, "90+");
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(hex_to_rgb("#0c2c84"), Some([0x0c, 0x2c, 0x84]));
        assert_eq!(hex_to_rgb("#ffffff"), Some([255, 255, 255]));
        assert_eq!(hex_to_rgb("0c2c84"), None);
        assert_eq!(hex_to_rgb("#0c2c8"), None);
        assert_eq!(hex_to_rgb("#zzzzzz"), None);
        // Six bytes but not six ASCII digits.
        assert_eq!(hex_to_rgb("#a\u{e9}bcd"), None);
        assert_eq!(hex_to_rgb("#\u{2013}\u{2013}"), None);
    }
}
