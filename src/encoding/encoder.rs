//! Conversion of a house description into a model's input vector.

use tracing::debug;

use super::house::HouseFeatures;
use crate::error::{LhpError, Result};

/// Encodes house descriptions into the column layout a trained model expects.
///
/// `Condition` and `PropertyType` become ordinal codes, `PropertySubType`
/// and `Parish` become one-hot `"<Field>_<Value>"` columns, and numeric
/// fields keep their names. The result follows the encoder's feature list:
/// expected columns the house does not produce are zero, and produced
/// columns the model was not trained on are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureEncoder {
    feature_names: Vec<String>,
}

impl FeatureEncoder {
    /// Create an encoder for a model trained on `feature_names`.
    pub fn new<S: Into<String>>(feature_names: impl IntoIterator<Item = S>) -> Result<Self> {
        let feature_names: Vec<String> = feature_names.into_iter().map(Into::into).collect();
        if feature_names.is_empty() {
            return Err(LhpError::EmptyData);
        }
        Ok(Self { feature_names })
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Number of values produced per house.
    pub fn width(&self) -> usize {
        self.feature_names.len()
    }

    /// Encode one house.
    pub fn encode(&self, house: &HouseFeatures) -> Vec<f64> {
        let columns = encoded_columns(house);
        let mut row = vec![0.0; self.feature_names.len()];

        for (name, value) in &columns {
            match self.feature_names.iter().position(|f| f == name) {
                Some(i) => row[i] = *value,
                None => debug!(column = %name, "column not used by model"),
            }
        }

        row
    }

    /// Encode several houses, one row each.
    pub fn encode_batch(&self, houses: &[HouseFeatures]) -> Vec<Vec<f64>> {
        houses.iter().map(|h| self.encode(h)).collect()
    }
}

/// Columns produced by a house before alignment, in a fixed order.
pub fn encoded_columns(house: &HouseFeatures) -> Vec<(String, f64)> {
    let mut columns = Vec::with_capacity(9);

    if let Some(condition) = house.condition {
        columns.push(("Condition".to_string(), condition.code()));
    }
    if let Some(property_type) = house.property_type {
        columns.push(("PropertyType".to_string(), property_type.code()));
    }

    let numeric = [
        ("Bedrooms", house.bedrooms),
        ("Bathrooms", house.bathrooms),
        ("AreaNet", house.area_net),
        ("AreaGross", house.area_gross),
        ("Parking", house.parking),
    ];
    for (name, value) in numeric {
        if let Some(v) = value {
            columns.push((name.to_string(), v));
        }
    }

    let categorical = [
        ("PropertySubType", house.property_sub_type.as_deref()),
        ("Parish", house.parish.as_deref()),
    ];
    for (field, value) in categorical {
        if let Some(v) = value {
            columns.push((format!("{field}_{v}"), 1.0));
        }
    }

    columns
}
