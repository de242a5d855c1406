//! Regions of the map and the per-region values that colour them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;

/// Static weight attached to a region at render time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionValue {
    pub value: f64,
}

/// Geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Axis-aligned lat/lon bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min: GeoPoint,
    pub max: GeoPoint,
}

impl GeoBounds {
    /// Smallest box containing every point, or `None` for an empty iterator.
    pub fn enclosing(points: impl IntoIterator<Item = GeoPoint>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for p in iter {
            bounds.min.lat = bounds.min.lat.min(p.lat);
            bounds.min.lon = bounds.min.lon.min(p.lon);
            bounds.max.lat = bounds.max.lat.max(p.lat);
            bounds.max.lon = bounds.max.lon.max(p.lon);
        }
        Some(bounds)
    }

    /// Map a point into `[0, 1]²` with y growing southwards (screen order).
    pub fn normalize(&self, p: GeoPoint) -> (f64, f64) {
        let span_lon = (self.max.lon - self.min.lon).max(f64::EPSILON);
        let span_lat = (self.max.lat - self.min.lat).max(f64::EPSILON);
        (
            (p.lon - self.min.lon) / span_lon,
            (self.max.lat - p.lat) / span_lat,
        )
    }
}

/// A selectable map region, recreated on every render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub name: String,
    pub value: f64,
    /// Placement for the tile cartogram; `None` for names we have no position for.
    pub centroid: Option<GeoPoint>,
}

/// Mapping from region display name to its value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionData {
    values: BTreeMap<String, RegionValue>,
}

impl RegionData {
    pub fn new() -> Self {
        Self::default()
    }

    /// The 34 states and union territories shown by default.
    pub fn india() -> Self {
        INDIA
            .iter()
            .map(|&(name, value, _, _)| (name, value))
            .collect()
    }

    /// Parse `{ "<name>": { "value": n }, ... }`.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), RegionValue { value });
    }

    pub fn get(&self, name: &str) -> Option<Region> {
        self.values.get(name).map(|v| Region {
            name: name.to_string(),
            value: v.value,
            centroid: centroid_of(name),
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Regions in name order.
    pub fn regions(&self) -> impl Iterator<Item = Region> + '_ {
        self.values.iter().map(|(name, v)| Region {
            name: name.clone(),
            value: v.value,
            centroid: centroid_of(name),
        })
    }

    /// `(min, max)` over all values, `None` when empty.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values.values().fold(None, |acc, v| match acc {
            None => Some((v.value, v.value)),
            Some((lo, hi)) => Some((lo.min(v.value), hi.max(v.value))),
        })
    }

    /// Bounding box of every region that has a known centroid.
    pub fn bounds(&self) -> Option<GeoBounds> {
        GeoBounds::enclosing(self.regions().filter_map(|r| r.centroid))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for RegionData {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut data = Self::new();
        for (name, value) in iter {
            data.insert(name, value);
        }
        data
    }
}

/// Approximate centroid for a known region name.
pub fn centroid_of(name: &str) -> Option<GeoPoint> {
    INDIA
        .iter()
        .find(|(n, ..)| *n == name)
        .map(|&(_, _, lat, lon)| GeoPoint { lat, lon })
}

// Names are the map's display keys, spelling included.
const INDIA: &[(&str, f64, f64, f64)] = &[
    ("Andaman & Nicobar Island", 150.0, 11.74, 92.66),
    ("Andhra Pradesh", 470.0, 15.91, 79.74),
    ("Arunanchal Pradesh", 248.0, 28.22, 94.73),
    ("Assam", 528.0, 26.20, 92.94),
    ("Bihar", 755.0, 25.10, 85.31),
    ("Chandigarh", 95.0, 30.73, 76.78),
    ("Chhattisgarh", 1700.0, 21.28, 81.87),
    ("Delhi", 1823.0, 28.70, 77.10),
    ("Goa", 508.0, 15.30, 74.12),
    ("Gujarat", 624.0, 22.26, 71.19),
    ("Haryana", 1244.0, 29.06, 76.09),
    ("Himachal Pradesh", 640.0, 31.10, 77.17),
    ("Jammu & Kashmir", 566.0, 33.78, 76.58),
    ("Jharkhand", 814.0, 23.61, 85.28),
    ("Karnataka", 2482.0, 15.32, 75.71),
    ("Kerala", 899.0, 10.85, 76.27),
    ("Lakshadweep", 15.0, 10.57, 72.64),
    ("Madhya Pradesh", 1176.0, 22.97, 78.66),
    ("Maharashtra", 727.0, 19.75, 75.71),
    ("Manipur", 314.0, 24.66, 93.91),
    ("Meghalaya", 273.0, 25.47, 91.37),
    ("Mizoram", 306.0, 23.16, 92.94),
    ("Nagaland", 374.0, 26.16, 94.56),
    ("Odisha", 395.0, 20.95, 85.10),
    ("Puducherry", 245.0, 11.94, 79.81),
    ("Punjab", 786.0, 31.15, 75.34),
    ("Rajasthan", 1819.0, 27.02, 74.22),
    ("Sikkim", 152.0, 27.53, 88.51),
    ("Tamil Nadu", 2296.0, 11.13, 78.66),
    ("Telangana", 467.0, 18.11, 79.02),
    ("Tripura", 194.0, 23.94, 91.99),
    ("Uttar Pradesh", 2944.0, 26.85, 80.95),
    ("Uttarakhand", 1439.0, 30.07, 79.02),
    ("West Bengal", 1321.0, 22.99, 87.85),
];
