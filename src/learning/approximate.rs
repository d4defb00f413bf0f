//! Linear function approximation of Q-values

use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    sync::Arc,
};

use tracing::info;

use super::{agent::QLearningAgent, q_table::QFunction};
use crate::{Result, config::LearningConfig, registry::Registry};

/// Named feature values of one (state, action) pair.
pub type FeatureVector = HashMap<String, f64>;

/// Maps a (state, action) pair to named feature values.
pub trait FeatureExtractor<S, A> {
    fn features(&self, state: &S, action: &A) -> FeatureVector;
}

/// Shared handle to a feature extractor.
pub type SharedExtractor<S, A> = Arc<dyn FeatureExtractor<S, A>>;

/// Registry of feature extractors, resolved by name.
pub type FeatureRegistry<S, A> = Registry<SharedExtractor<S, A>>;

/// One indicator feature per (state, action) pair.
///
/// A linear Q-function over these features is exactly a Q-table.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityExtractor;

impl<S: fmt::Debug, A: fmt::Debug> FeatureExtractor<S, A> for IdentityExtractor {
    fn features(&self, state: &S, action: &A) -> FeatureVector {
        HashMap::from([(format!("{state:?}|{action:?}"), 1.0)])
    }
}

/// Feature extractors available for any state: `"identity"`.
pub fn default_features<S, A>() -> FeatureRegistry<S, A>
where
    S: fmt::Debug + 'static,
    A: fmt::Debug + 'static,
{
    let identity: SharedExtractor<S, A> = Arc::new(IdentityExtractor);
    Registry::new("feature extractor").with("identity", identity)
}

/// `Q(s, a) = Σ w_f · f(s, a)` with weights starting at zero.
pub struct LinearQFunction<S, A> {
    weights: BTreeMap<String, f64>,
    extractor: SharedExtractor<S, A>,
}

impl<S, A> LinearQFunction<S, A> {
    pub fn new(extractor: SharedExtractor<S, A>) -> Self {
        Self {
            weights: BTreeMap::new(),
            extractor,
        }
    }

    pub fn weight(&self, feature: &str) -> f64 {
        self.weights.get(feature).copied().unwrap_or(0.0)
    }

    /// Learned weights, sorted by feature name.
    pub fn weights(&self) -> &BTreeMap<String, f64> {
        &self.weights
    }
}

impl<S, A> QFunction<S, A> for LinearQFunction<S, A> {
    fn q_value(&self, state: &S, action: &A) -> f64 {
        self.extractor
            .features(state, action)
            .iter()
            .map(|(feature, value)| self.weight(feature) * value)
            .sum()
    }

    fn apply_correction(&mut self, state: &S, action: &A, step: f64) {
        for (feature, value) in self.extractor.features(state, action) {
            *self.weights.entry(feature).or_insert(0.0) += step * value;
        }
    }

    fn training_complete(&self) {
        for (feature, weight) in &self.weights {
            info!(feature = feature.as_str(), weight, "learned weight");
        }
    }
}

impl<S, A> fmt::Debug for LinearQFunction<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearQFunction")
            .field("weights", &self.weights)
            .finish_non_exhaustive()
    }
}

/// Q-learning over a linear combination of features.
pub type ApproximateQAgent<S, A> = QLearningAgent<S, A, LinearQFunction<S, A>>;

impl<S: Clone, A: Clone> QLearningAgent<S, A, LinearQFunction<S, A>> {
    pub fn approximate(
        config: LearningConfig,
        extractor: SharedExtractor<S, A>,
        legal_actions: impl Fn(&S) -> Vec<A> + 'static,
    ) -> Self {
        Self::with_q_function(config, LinearQFunction::new(extractor), legal_actions)
            .with_name("approximate_q_learning")
    }

    /// Build with the extractor registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownEntry`] if no extractor has that name.
    pub fn from_registry(
        name: &str,
        registry: &FeatureRegistry<S, A>,
        config: LearningConfig,
        legal_actions: impl Fn(&S) -> Vec<A> + 'static,
    ) -> Result<Self> {
        let extractor = Arc::clone(registry.resolve(name)?);
        Ok(Self::approximate(config, extractor, legal_actions))
    }

    pub fn weights(&self) -> &BTreeMap<String, f64> {
        self.q_function().weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Constant features so the weight update is easy to follow.
    struct Fixed;

    impl FeatureExtractor<u8, u8> for Fixed {
        fn features(&self, _state: &u8, action: &u8) -> FeatureVector {
            HashMap::from([
                ("bias".to_string(), 1.0),
                ("action".to_string(), f64::from(*action)),
            ])
        }
    }

    #[test]
    fn test_weight_update() {
        let mut q = LinearQFunction::new(Arc::new(Fixed));
        q.apply_correction(&0, &2, 0.5);
        assert_eq!(q.weight("bias"), 0.5);
        assert_eq!(q.weight("action"), 1.0);
        assert_eq!(q.q_value(&0, &2), 0.5 + 2.0);
        assert_eq!(q.q_value(&0, &0), 0.5);
    }

    #[test]
    fn test_identity_feature_name() {
        let features = FeatureExtractor::<u8, char>::features(&IdentityExtractor, &3, &'x');
        assert_eq!(features, HashMap::from([("3|'x'".to_string(), 1.0)]));
    }

    #[test]
    fn test_unknown_extractor() {
        let result = ApproximateQAgent::<u8, u8>::from_registry(
            "fancy",
            &default_features(),
            LearningConfig::default(),
            |_| vec![0],
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("identity"));
    }
}
