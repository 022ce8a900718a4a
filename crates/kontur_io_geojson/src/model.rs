//! Serializable GeoJSON models and the result-to-collection mapping.

use serde::Serialize;

use kontur_engine::SpecConversionResult;

/// CRS member value carried by every emitted collection.
pub const C_CRS84_URN: &str = "urn:ogc:def:crs:OGC:1.3:CRS84";

////////////////////////////////////////////////////////////////////////////////
// #region Models

/// Top-level GeoJSON feature collection.
#[derive(Debug, Clone, Serialize)]
pub struct SpecFeatureCollection {
    #[serde(rename = "type")]
    c_type: &'static str,
    /// Collection name, the source document identifier.
    pub name: String,
    /// Named CRS member (CRS84), matching the template's downstream tooling.
    pub crs: SpecCrs,
    /// Boundary polygon first, then the optional anchor point.
    pub features: Vec<SpecFeature>,
}

/// Named coordinate reference system member.
#[derive(Debug, Clone, Serialize)]
pub struct SpecCrs {
    #[serde(rename = "type")]
    c_type: &'static str,
    properties: SpecCrsName,
}

#[derive(Debug, Clone, Serialize)]
struct SpecCrsName {
    name: &'static str,
}

impl Default for SpecCrs {
    fn default() -> Self {
        Self {
            c_type: "name",
            properties: SpecCrsName { name: C_CRS84_URN },
        }
    }
}

/// One GeoJSON feature.
#[derive(Debug, Clone, Serialize)]
pub struct SpecFeature {
    #[serde(rename = "type")]
    c_type: &'static str,
    /// Provenance and validation summary.
    pub properties: SpecFeatureProperties,
    /// Feature geometry.
    pub geometry: EnumGeometry,
}

/// Feature properties: provenance plus the advisory validation outcome.
#[derive(Debug, Clone, Serialize)]
pub struct SpecFeatureProperties {
    /// Originating document identifier.
    pub source_document: String,
    /// Originating worksheet name.
    pub sheet: String,
    /// Feature role, `"boundary"` or `"anchor"`.
    pub role: &'static str,
    /// Validation verdict for the walked sequence.
    pub validation_ok: bool,
    /// One `kind: message (at ...)` line per advisory issue.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validation_issues: Vec<String>,
}

/// Geometry member, tagged the GeoJSON way.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum EnumGeometry {
    /// Closed boundary ring as a single-ring polygon.
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
    /// Anchor reference point.
    Point { coordinates: [f64; 2] },
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Mapping

/// Map one conversion result onto its feature collection.
pub fn derive_feature_collection(result: &SpecConversionResult) -> SpecFeatureCollection {
    let l_ring: Vec<[f64; 2]> = result
        .ring
        .iter()
        .map(|record| [record.x, record.y])
        .collect();

    let l_issue_lines: Vec<String> = result
        .report
        .issues
        .iter()
        .map(|issue| format!("{}: {} (at {})", issue.kind.as_str(), issue.message, issue.at))
        .collect();

    let mut l_features = vec![SpecFeature {
        c_type: "Feature",
        properties: SpecFeatureProperties {
            source_document: result.source_document.clone(),
            sheet: result.sheet_name.clone(),
            role: "boundary",
            validation_ok: result.report.ok,
            validation_issues: l_issue_lines,
        },
        geometry: EnumGeometry::Polygon {
            coordinates: vec![l_ring],
        },
    }];

    if let Some(anchor) = &result.anchor {
        l_features.push(SpecFeature {
            c_type: "Feature",
            properties: SpecFeatureProperties {
                source_document: result.source_document.clone(),
                sheet: result.sheet_name.clone(),
                role: "anchor",
                validation_ok: result.report.ok,
                validation_issues: Vec::new(),
            },
            geometry: EnumGeometry::Point {
                coordinates: [anchor.x, anchor.y],
            },
        });
    }

    SpecFeatureCollection {
        c_type: "FeatureCollection",
        name: result.source_document.clone(),
        crs: SpecCrs::default(),
        features: l_features,
    }
}

/// Render one conversion result as pretty-printed GeoJSON text.
pub fn render_feature_collection(
    result: &SpecConversionResult,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&derive_feature_collection(result))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
