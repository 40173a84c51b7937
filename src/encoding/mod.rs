//! Feature encoding for trained price models.

mod encoder;
mod house;

pub use encoder::{encoded_columns, FeatureEncoder};
pub use house::{Condition, HouseFeatures, PropertyType};
