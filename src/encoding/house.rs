//! Raw description of a property, as submitted for a price estimate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LhpError;

/// State of repair, encoded ordinally (worst = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Condition {
    ForRefurbishment,
    Used,
    AsNew,
    New,
}

impl Condition {
    pub fn code(&self) -> f64 {
        match self {
            Condition::ForRefurbishment => 1.0,
            Condition::Used => 2.0,
            Condition::AsNew => 3.0,
            Condition::New => 4.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Condition::ForRefurbishment => "For Refurbishment",
            Condition::Used => "Used",
            Condition::AsNew => "As New",
            Condition::New => "New",
        }
    }
}

impl FromStr for Condition {
    type Err = LhpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "for refurbishment" => Ok(Condition::ForRefurbishment),
            "used" => Ok(Condition::Used),
            "as new" => Ok(Condition::AsNew),
            "new" => Ok(Condition::New),
            _ => Err(LhpError::UnknownCategory {
                feature: "Condition".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Kind of property, encoded as 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PropertyType {
    Homes,
    SingleHabitation,
}

impl PropertyType {
    pub fn code(&self) -> f64 {
        match self {
            PropertyType::Homes => 1.0,
            PropertyType::SingleHabitation => 2.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Homes => "Homes",
            PropertyType::SingleHabitation => "Single Habitation",
        }
    }
}

impl FromStr for PropertyType {
    type Err = LhpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "homes" => Ok(PropertyType::Homes),
            "single habitation" => Ok(PropertyType::SingleHabitation),
            _ => Err(LhpError::UnknownCategory {
                feature: "PropertyType".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

macro_rules! string_conversions {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl TryFrom<String> for $ty {
            type Error = LhpError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.label().to_string()
            }
        }
    )*};
}

string_conversions!(Condition, PropertyType);

/// House description. Every field is optional; absent numeric fields
/// encode as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HouseFeatures {
    pub condition: Option<Condition>,
    pub property_type: Option<PropertyType>,
    /// E.g. "Apartment", "Duplex"; one-hot encoded.
    pub property_sub_type: Option<String>,
    pub bedrooms: Option<f64>,
    pub bathrooms: Option<f64>,
    /// Net area in square metres.
    pub area_net: Option<f64>,
    /// Gross area in square metres.
    pub area_gross: Option<f64>,
    pub parking: Option<f64>,
    /// Lisbon parish; one-hot encoded.
    pub parish: Option<String>,
}

impl HouseFeatures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = Some(property_type);
        self
    }

    pub fn with_property_sub_type(mut self, sub_type: impl Into<String>) -> Self {
        self.property_sub_type = Some(sub_type.into());
        self
    }

    pub fn with_rooms(mut self, bedrooms: f64, bathrooms: f64) -> Self {
        self.bedrooms = Some(bedrooms);
        self.bathrooms = Some(bathrooms);
        self
    }

    pub fn with_area(mut self, net: f64, gross: f64) -> Self {
        self.area_net = Some(net);
        self.area_gross = Some(gross);
        self
    }

    pub fn with_parking(mut self, spaces: f64) -> Self {
        self.parking = Some(spaces);
        self
    }

    pub fn with_parish(mut self, parish: impl Into<String>) -> Self {
        self.parish = Some(parish.into());
        self
    }
}
