//! `kontur_io_geojson` v1: typed GeoJSON rendering of conversion results.
//!
//! One feature collection per document: a `Polygon` feature for the boundary
//! ring and, when present, a `Point` feature for the anchor. Positions are
//! `[x, y]` pass-through; the collection names CRS84 the way the source
//! templates expect downstream GIS tooling to read it.

pub mod model;

pub use model::{
    C_CRS84_URN, EnumGeometry, SpecFeature, SpecFeatureCollection, SpecFeatureProperties,
    derive_feature_collection, render_feature_collection,
};
