//! Policy.
use super::Env;
use anyhow::Result;
use serde::de::DeserializeOwned;
use std::{fs::File, io::BufReader, path::Path};

/// Chooses an action for an observation.
///
/// A call may change the policy itself, e.g. advance an exploration schedule.
pub trait Policy<E: Env> {
    /// Returns the action to take on `obs`.
    fn sample(&mut self, obs: &E::Obs) -> E::Act;
}

/// An object built from a deserializable configuration.
pub trait Configurable<E: Env> {
    /// Configuration.
    type Config: Clone + DeserializeOwned;

    /// Builds the object.
    fn build(config: Self::Config) -> Self;

    /// Builds the object from a YAML configuration file.
    fn build_from_path(path: impl AsRef<Path>) -> Result<Self>
    where
        Self: Sized,
    {
        let rdr = BufReader::new(File::open(path)?);
        let config = serde_yaml::from_reader(rdr)?;
        Ok(Self::build(config))
    }
}
