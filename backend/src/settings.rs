//! Store configuration loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::info;

use crate::domain::{SeedError, SocialGraphSeed};
use crate::outbound::memory::{SimulatedLatency, SocialGraphStore};

/// Configuration values controlling how the in-memory store is built.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SIX_DEGREE")]
pub struct StoreSettings {
    /// Simulated round-trip applied to every store operation, in milliseconds.
    #[ortho_config(default = 300)]
    pub latency_ms: u64,
    /// Optional seed file replacing the built-in dataset.
    pub seed_path: Option<PathBuf>,
}

impl StoreSettings {
    /// Configured latency.
    pub fn latency(&self) -> SimulatedLatency {
        SimulatedLatency::from_millis(self.latency_ms)
    }

    /// Load the configured seed, falling back to the built-in dataset.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] when the seed file is unreadable or invalid.
    pub fn load_seed(&self) -> Result<SocialGraphSeed, SeedError> {
        match &self.seed_path {
            Some(path) => {
                info!(path = %path.display(), "loading seed file");
                SocialGraphSeed::from_file(path)
            }
            None => SocialGraphSeed::builtin(),
        }
    }

    /// Build a store from these settings.
    ///
    /// # Errors
    ///
    /// Propagates [`SeedError`] from [`Self::load_seed`].
    pub fn build_store(&self) -> Result<SocialGraphStore, SeedError> {
        let seed = self.load_seed()?;
        Ok(SocialGraphStore::new(seed).with_latency(self.latency()))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for store settings parsing.

    use super::*;
    use std::ffi::OsString;
    use std::io::Write;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> StoreSettings {
        StoreSettings::load_from_iter([OsString::from("six-degree")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("SIX_DEGREE_LATENCY_MS", None::<String>),
            ("SIX_DEGREE_SEED_PATH", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.latency(), SimulatedLatency::DEFAULT);
        assert!(settings.seed_path.is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("SIX_DEGREE_LATENCY_MS", Some("0".to_owned())),
            ("SIX_DEGREE_SEED_PATH", Some("/tmp/seed.json".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.latency(), SimulatedLatency::NONE);
        assert_eq!(settings.seed_path, Some(PathBuf::from("/tmp/seed.json")));
    }

    #[rstest]
    fn build_store_uses_builtin_seed_by_default() {
        let settings = StoreSettings {
            latency_ms: 5,
            seed_path: None,
        };
        let store = settings.build_store().expect("store builds");
        assert_eq!(store.latency(), SimulatedLatency::from_millis(5));
    }

    #[rstest]
    fn load_seed_reads_configured_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(br#"{"version": 1, "currentUserId": "u_solo", "users": [{"id": "u_solo", "name": "Solo"}]}"#)
            .expect("write seed");
        let settings = StoreSettings {
            latency_ms: 0,
            seed_path: Some(file.path().to_path_buf()),
        };

        let seed = settings.load_seed().expect("seed loads");
        assert_eq!(seed.current_user_id().as_ref(), "u_solo");
    }

    #[rstest]
    fn load_seed_surfaces_missing_file() {
        let settings = StoreSettings {
            latency_ms: 0,
            seed_path: Some(PathBuf::from("/definitely/not/here/seed.json")),
        };
        assert!(matches!(settings.load_seed(), Err(SeedError::Io { .. })));
    }
}
