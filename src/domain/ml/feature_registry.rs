/// Ordered list of feature names.
/// This order MUST match the coefficient order of every persisted model.
/// Any change here is a breaking change for model artifacts.
pub const FEATURE_NAMES: &[&str] = &["complexity", "demand", "rating"];

pub const FEATURE_COUNT: usize = 3;

/// The ordered triple fed to the regression model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(complexity: f64, demand: f64, rating: f64) -> Self {
        Self([complexity, demand, rating])
    }

    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        self.0
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// True when `names` lists exactly [`FEATURE_NAMES`], in order.
pub fn matches_registry(names: &[String]) -> bool {
    names.len() == FEATURE_NAMES.len()
        && names
            .iter()
            .zip(FEATURE_NAMES.iter())
            .all(|(name, expected)| name == expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_consistent() {
        assert_eq!(FEATURE_NAMES.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_matches_registry_is_order_sensitive() {
        let ordered: Vec<String> = FEATURE_NAMES.iter().map(|s| s.to_string()).collect();
        assert!(matches_registry(&ordered));

        let swapped = vec![
            "demand".to_string(),
            "complexity".to_string(),
            "rating".to_string(),
        ];
        assert!(!matches_registry(&swapped));
        assert!(!matches_registry(&ordered[..2]));
    }
}
