use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};
use crate::optim::sgd::Sgd;
use crate::train::train_config::TrainConfig;

/// A serializable description of one training run: architecture plus
/// hyperparameters.
///
/// This is a run configuration only; trained parameters are never written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSpec {
    /// Neurons per layer, input first.
    pub layer_sizes: Vec<usize>,
    pub epochs: usize,
    pub mini_batch_size: usize,
    pub learning_rate: f64,
    /// Seed for initialization and shuffling; drawn from the OS when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RunSpec {
    fn default() -> Self {
        RunSpec {
            layer_sizes: vec![2, 4, 2],
            epochs: 2000,
            mini_batch_size: 2,
            learning_rate: 3.0,
            seed: None,
        }
    }
}

impl RunSpec {
    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads and validates a spec from a JSON file.
    pub fn load_json(path: &str) -> Result<RunSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let spec: RunSpec = serde_json::from_reader(reader)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Rejects every value the network constructor or training loop would refuse.
    pub fn validate(&self) -> Result<()> {
        if self.layer_sizes.len() < 2 {
            return Err(NetworkError::TooFewLayers(self.layer_sizes.len()));
        }
        if let Some(index) = self.layer_sizes.iter().position(|&s| s == 0) {
            return Err(NetworkError::EmptyLayer { index });
        }
        self.optimizer()?;
        self.train_config().validate()
    }

    pub fn optimizer(&self) -> Result<Sgd> {
        Sgd::new(self.learning_rate)
    }

    pub fn train_config(&self) -> TrainConfig {
        TrainConfig::new(self.epochs, self.mini_batch_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(RunSpec::default().validate().is_ok());
    }

    #[test]
    fn validate_catches_each_field() {
        let base = RunSpec::default();

        let spec = RunSpec { layer_sizes: vec![3], ..base.clone() };
        assert!(matches!(spec.validate(), Err(NetworkError::TooFewLayers(1))));

        let spec = RunSpec { layer_sizes: vec![3, 0, 1], ..base.clone() };
        assert!(matches!(spec.validate(), Err(NetworkError::EmptyLayer { index: 1 })));

        let spec = RunSpec { learning_rate: 0.0, ..base.clone() };
        assert!(matches!(spec.validate(), Err(NetworkError::InvalidConfig(_))));

        let spec = RunSpec { epochs: 0, ..base.clone() };
        assert!(spec.validate().is_err());

        let spec = RunSpec { mini_batch_size: 0, ..base };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn json_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("backprop-nn-spec-{}.json", std::process::id()));
        let path = path.to_str().unwrap();
        let spec = RunSpec { seed: Some(7), ..RunSpec::default() };

        spec.save_json(path).unwrap();
        let loaded = RunSpec::load_json(path).unwrap();
        std::fs::remove_file(path).unwrap();

        assert_eq!(loaded, spec);
    }

    #[test]
    fn seed_is_optional_in_json() {
        let spec: RunSpec = serde_json::from_str(
            r#"{"layer_sizes":[2,3,1],"epochs":5,"mini_batch_size":2,"learning_rate":0.5}"#,
        )
        .unwrap();
        assert_eq!(spec.seed, None);
        assert_eq!(spec.layer_sizes, vec![2, 3, 1]);
    }

    #[test]
    fn load_rejects_invalid_values() {
        let path = std::env::temp_dir().join(format!("backprop-nn-bad-{}.json", std::process::id()));
        let path = path.to_str().unwrap();
        std::fs::write(
            path,
            r#"{"layer_sizes":[2],"epochs":5,"mini_batch_size":2,"learning_rate":0.5}"#,
        )
        .unwrap();
        let result = RunSpec::load_json(path);
        std::fs::remove_file(path).unwrap();
        assert!(matches!(result, Err(NetworkError::TooFewLayers(1))));

        assert!(matches!(
            RunSpec::load_json("/nonexistent/backprop-nn.json"),
            Err(NetworkError::Io(_))
        ));
    }
}
