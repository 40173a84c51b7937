//! Identifiers for the six trained regression models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LhpError;

/// One of the six regression approaches whose predictions are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ModelKind {
    Linear,
    DecisionTree,
    RandomForest,
    /// Support vector regression.
    Svr,
    Ridge,
    Lasso,
}

impl ModelKind {
    /// All models in their canonical order.
    pub const ALL: [ModelKind; 6] = [
        ModelKind::Linear,
        ModelKind::DecisionTree,
        ModelKind::RandomForest,
        ModelKind::Svr,
        ModelKind::Ridge,
        ModelKind::Lasso,
    ];

    /// Snake-case key used for saved model files (`lhp_<key>.pkl`).
    pub fn key(&self) -> &'static str {
        match self {
            ModelKind::Linear => "linear",
            ModelKind::DecisionTree => "decision_tree",
            ModelKind::RandomForest => "random_forest",
            ModelKind::Svr => "svr",
            ModelKind::Ridge => "ridge",
            ModelKind::Lasso => "lasso",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelKind::Linear => "Linear",
            ModelKind::DecisionTree => "Decision Tree",
            ModelKind::RandomForest => "Random Forest",
            ModelKind::Svr => "SVR",
            ModelKind::Ridge => "Ridge",
            ModelKind::Lasso => "Lasso",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ModelKind {
    type Err = LhpError;

    /// Accepts keys, display names and saved-model file stems, e.g.
    /// `"random_forest"`, `"Random Forest"`, `"lhp_random-forest"`,
    /// `"Lasso Regression"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect();
        let stem = normalized.strip_prefix("lhp_").unwrap_or(normalized.as_str());
        let stem = stem
            .strip_suffix("_regression")
            .or_else(|| stem.strip_suffix("_regressor"))
            .unwrap_or(stem);

        match stem {
            "linear" => Ok(ModelKind::Linear),
            "decision_tree" | "decisiontree" => Ok(ModelKind::DecisionTree),
            "random_forest" | "randomforest" => Ok(ModelKind::RandomForest),
            "svr" | "support_vector" => Ok(ModelKind::Svr),
            "ridge" => Ok(ModelKind::Ridge),
            "lasso" => Ok(ModelKind::Lasso),
            _ => Err(LhpError::UnknownModel(s.to_string())),
        }
    }
}

impl TryFrom<String> for ModelKind {
    type Error = LhpError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ModelKind> for String {
    fn from(kind: ModelKind) -> Self {
        kind.key().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_parse() {
        for kind in ModelKind::ALL {
            assert_eq!(kind.key().parse::<ModelKind>().unwrap(), kind);
            assert_eq!(kind.display_name().parse::<ModelKind>().unwrap(), kind);
        }
    }

    #[test]
    fn parse_accepts_file_stems_and_long_names() {
        assert_eq!(
            "lhp_random_forest".parse::<ModelKind>().unwrap(),
            ModelKind::RandomForest
        );
        assert_eq!(
            "Support Vector Regression".parse::<ModelKind>().unwrap(),
            ModelKind::Svr
        );
        assert_eq!(
            "  decision-tree ".parse::<ModelKind>().unwrap(),
            ModelKind::DecisionTree
        );
        assert_eq!(
            "Linear Regression".parse::<ModelKind>().unwrap(),
            ModelKind::Linear
        );
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "ensemble_average".parse::<ModelKind>().unwrap_err();
        assert_eq!(err, LhpError::UnknownModel("ensemble_average".to_string()));
    }

    #[test]
    fn serde_uses_snake_case_keys() {
        let json = serde_json::to_string(&ModelKind::DecisionTree).unwrap();
        assert_eq!(json, "\"decision_tree\"");

        let parsed: ModelKind = serde_json::from_str("\"Random Forest\"").unwrap();
        assert_eq!(parsed, ModelKind::RandomForest);

        assert!(serde_json::from_str::<ModelKind>("\"knn\"").is_err());
    }
}
