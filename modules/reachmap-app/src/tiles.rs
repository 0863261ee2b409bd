use walkers::sources::{Attribution, TileSource};
use walkers::TileId;

/// OpenStreetMap raster tiles, capped at the zoom the choropleth needs.
pub struct OsmTileSource;

impl TileSource for OsmTileSource {
    fn tile_url(&self, tile_id: TileId) -> String {
        format!(
            "https://tile.openstreetmap.org/{}/{}/{}.png",
            tile_id.zoom, tile_id.x, tile_id.y
        )
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: "© OpenStreetMap contributors",
            url: "https://www.openstreetmap.org/copyright",
            logo_light: None,
            logo_dark: None,
        }
    }

    fn max_zoom(&self) -> u8 {
        6
    }
}
