//! Cache key for constructed model instances

use std::fmt;

use crate::domain::instance::ModelParams;

/// Composite cache key: model id plus canonical construction parameters
///
/// Two lookups share an entry exactly when the id matches and the
/// parameter sets are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelCacheKey {
    model_id: String,
    params: String,
}

impl ModelCacheKey {
    pub fn new(model_id: impl Into<String>, params: &ModelParams) -> Self {
        Self {
            model_id: model_id.into(),
            params: params.canonical(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Canonical parameter rendering
    pub fn params(&self) -> &str {
        &self.params
    }
}

impl fmt::Display for ModelCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.model_id, self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_same_id_and_params_are_equal() {
        let a = ModelCacheKey::new(
            "m1",
            &ModelParams::new().with("temperature", 0.1).with("max_tokens", 10),
        );
        let b = ModelCacheKey::new(
            "m1",
            &ModelParams::new().with("max_tokens", 10).with("temperature", 0.1),
        );

        assert_eq!(a, b);
        assert_eq!(a.to_string(), r#"m1:{"max_tokens":10,"temperature":0.1}"#);
    }

    #[test]
    fn test_params_distinguish_keys() {
        let plain = ModelCacheKey::new("m1", &ModelParams::new());
        let tuned = ModelCacheKey::new("m1", &ModelParams::new().with("temperature", 0.9));

        let keys: HashSet<_> = [plain.clone(), tuned.clone(), plain.clone()].into_iter().collect();
        assert_eq!(keys.len(), 2);
        assert_eq!(plain.params(), "{}");
    }

    #[test]
    fn test_ids_distinguish_keys() {
        let a = ModelCacheKey::new("m1", &ModelParams::new());
        let b = ModelCacheKey::new("m2", &ModelParams::new());

        assert_ne!(a, b);
        assert_eq!(a.model_id(), "m1");
    }
}
