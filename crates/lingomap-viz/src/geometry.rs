//! Screen placement of region tiles.

use egui::{Pos2, Rect};
use lingomap_core::RegionData;

/// One region's tile in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub name: String,
    pub value: f64,
    pub center: Pos2,
    pub radius: f32,
}

impl Tile {
    fn contains(&self, pos: Pos2) -> bool {
        self.center.distance(pos) <= self.radius
    }
}

/// Tiles for every placeable region, fitted to a screen rect.
#[derive(Debug, Clone, Default)]
pub struct MapGeometry {
    tiles: Vec<Tile>,
    /// Regions without a known centroid.
    unplaced: Vec<String>,
}

impl MapGeometry {
    /// Fit the dataset's centroids into `rect`, keeping the lon/lat aspect ratio.
    pub fn layout(data: &RegionData, rect: Rect, tile_radius: f32) -> Self {
        let unplaced = data
            .regions()
            .filter(|r| r.centroid.is_none())
            .map(|r| r.name)
            .collect();

        let Some(bounds) = data.bounds() else {
            return Self {
                tiles: Vec::new(),
                unplaced,
            };
        };

        let inner = rect.shrink(tile_radius);
        let span_lon = (bounds.max.lon - bounds.min.lon) as f32;
        let span_lat = (bounds.max.lat - bounds.min.lat) as f32;

        // Largest box with the data's aspect ratio that fits `inner`.
        let (w, h) = if span_lon <= 0.0 || span_lat <= 0.0 {
            (0.0, 0.0)
        } else {
            let scale = (inner.width() / span_lon).min(inner.height() / span_lat).max(0.0);
            (span_lon * scale, span_lat * scale)
        };
        let origin = inner.center() - egui::vec2(w, h) / 2.0;

        let tiles = data
            .regions()
            .filter_map(|region| {
                let centroid = region.centroid?;
                let (x, y) = bounds.normalize(centroid);
                Some(Tile {
                    center: origin + egui::vec2(x as f32 * w, y as f32 * h),
                    name: region.name,
                    value: region.value,
                    radius: tile_radius,
                })
            })
            .collect();

        Self { tiles, unplaced }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn unplaced(&self) -> &[String] {
        &self.unplaced
    }

    /// Tile under `pos`; where tiles overlap the closest centre wins.
    pub fn hit_test(&self, pos: Pos2) -> Option<&Tile> {
        self.tiles
            .iter()
            .filter(|t| t.contains(pos))
            .min_by(|a, b| {
                a.center
                    .distance_sq(pos)
                    .total_cmp(&b.center.distance_sq(pos))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::from_min_size(Pos2::ZERO, egui::vec2(600.0, 600.0))
    }

    #[test]
    fn every_india_region_gets_a_tile_inside_the_rect() {
        let geom = MapGeometry::layout(&RegionData::india(), screen(), 12.0);
        assert_eq!(geom.tiles().len(), 34);
        assert!(geom.unplaced().is_empty());
        for tile in geom.tiles() {
            assert!(screen().shrink(11.9).contains(tile.center), "{tile:?}");
        }
    }

    #[test]
    fn hit_test_finds_tile_at_its_centre() {
        let geom = MapGeometry::layout(&RegionData::india(), screen(), 12.0);
        let kerala = geom.tiles().iter().find(|t| t.name == "Kerala").unwrap();

        assert_eq!(geom.hit_test(kerala.center).map(|t| t.name.as_str()), Some("Kerala"));
        assert!(geom.hit_test(Pos2::new(-50.0, -50.0)).is_none());
    }

    #[test]
    fn overlapping_tiles_resolve_to_nearest_centre() {
        let geom = MapGeometry::layout(&RegionData::india(), screen(), 40.0);
        let delhi = geom.tiles().iter().find(|t| t.name == "Delhi").unwrap();
        assert_eq!(geom.hit_test(delhi.center).map(|t| t.name.as_str()), Some("Delhi"));
    }

    #[test]
    fn unknown_regions_are_listed_not_drawn() {
        let data: RegionData = [("Kerala", 1.0), ("Atlantis", 2.0)].into_iter().collect();
        let geom = MapGeometry::layout(&data, screen(), 12.0);

        assert_eq!(geom.tiles().len(), 1);
        assert_eq!(geom.unplaced(), ["Atlantis".to_string()]);
    }

    #[test]
    fn empty_dataset_has_no_tiles() {
        let geom = MapGeometry::layout(&RegionData::new(), screen(), 12.0);
        assert!(geom.tiles().is_empty());
        assert!(geom.hit_test(Pos2::new(300.0, 300.0)).is_none());
    }
}
