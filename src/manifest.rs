//! Shipment manifests
//!
//! A manifest lists the parcels of one shipment and the requested speed.
//! YAML and JSON are both accepted:
//!
//! ```yaml
//! speed: expedited
//! parcels:
//!   - { width: 1, depth: 1, height: 1, weight: 0.5 }
//!   - { width: 1, depth: 1, height: 10 }
//! ```

use crate::breakdown::CostBreakdown;
use crate::calculator::ShippingCostCalculator;
use crate::error::{Error, Result};
use crate::parcel::Parcel;
use crate::surcharge::ShippingSpeed;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One shipment: parcels plus delivery speed
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Shipment manifest", description = "Parcels to price and the requested speed")]
pub struct ShipmentManifest {
    /// Delivery speed (default: normal)
    #[serde(default)]
    pub speed: ShippingSpeed,

    /// Parcels in billing order
    #[serde(default)]
    pub parcels: Vec<Parcel>,
}

impl ShipmentManifest {
    pub fn new(speed: ShippingSpeed, parcels: Vec<Parcel>) -> Self {
        Self { speed, parcels }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_norway::from_str(yaml).map_err(|e| Error::ManifestParse(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::ManifestParse(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_norway::to_string(self).map_err(|e| Error::ManifestParse(e.to_string()))
    }

    /// Load and validate a manifest file. `.json` files are read as JSON,
    /// anything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let manifest = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_yaml(&content)?
        };

        debug!(
            path = %path.display(),
            parcels = manifest.parcels.len(),
            speed = %manifest.speed,
            "loaded manifest"
        );

        manifest.validate()?;
        Ok(manifest)
    }

    /// Check every parcel; reports the first bad one
    pub fn validate(&self) -> Result<()> {
        for (index, parcel) in self.parcels.iter().enumerate() {
            parcel.validate(index)?;
        }
        Ok(())
    }

    /// Price the manifest at its own speed
    pub fn quote(&self) -> CostBreakdown {
        ShippingCostCalculator::new()
            .with_speed(self.speed)
            .calculate(&self.parcels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_yaml_defaults() {
        let manifest = ShipmentManifest::from_yaml(
            r#"
parcels:
  - { width: 1, depth: 1, height: 1, weight: 0.5 }
  - width: 1
    depth: 1
    height: 10
"#,
        )
        .unwrap();

        assert_eq!(manifest.speed, ShippingSpeed::Normal);
        assert_eq!(manifest.parcels.len(), 2);
        assert_eq!(manifest.parcels[1].weight, 0.0);
    }

    #[test]
    fn test_from_json_speedy_alias() {
        let manifest = ShipmentManifest::from_json(
            r#"{"speed": "speedy", "parcels": [{"width": 1, "depth": 1, "height": 1}]}"#,
        )
        .unwrap();
        assert_eq!(manifest.speed, ShippingSpeed::Expedited);
        assert_eq!(manifest.quote().total(), dec!(6.00));
    }

    #[test]
    fn test_unknown_speed_is_parse_error() {
        let err = ShipmentManifest::from_yaml("speed: overnight\nparcels: []\n").unwrap_err();
        assert!(matches!(err, Error::ManifestParse(_)));
    }

    #[test]
    fn test_validate_reports_index() {
        let manifest = ShipmentManifest::new(
            ShippingSpeed::Normal,
            vec![Parcel::default(), Parcel::new(1.0, -2.0, 1.0, 1.0)],
        );
        match manifest.validate() {
            Err(Error::InvalidParcel { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidParcel, got {:?}", other),
        }
    }

    #[test]
    fn test_yaml_round_trip() {
        let manifest = ShipmentManifest::new(
            ShippingSpeed::Expedited,
            vec![Parcel::new(12.0, 4.5, 30.0, 2.25)],
        );
        let yaml = manifest.to_yaml().unwrap();
        assert_eq!(ShipmentManifest::from_yaml(&yaml).unwrap(), manifest);
    }
}
