//! Initial dataset for the social graph store.
//!
//! A seed is injected into each store at construction. The built-in seed
//! ships with the crate as JSON; alternative seeds use the same format and
//! can be loaded from disk for demos.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Edge, Recommendation, User, UserId};

/// Current supported seed format version.
const SUPPORTED_VERSION: u32 = 1;

const BUILTIN_SEED: &str = include_str!("../../fixtures/social_graph_seed.json");

/// Errors raised while loading or validating a seed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file at '{path}': {message}")]
    Io {
        /// Path to the seed file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The JSON is malformed or a value fails domain validation.
    #[error("invalid seed JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },

    /// The seed version is not supported.
    #[error("unsupported seed version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the seed.
        actual: u32,
    },

    /// Two roster entries share an id.
    #[error("duplicate user id '{id}' in roster")]
    DuplicateUser {
        /// The repeated id.
        id: String,
    },

    /// The current user is not part of the roster.
    #[error("current user '{id}' is missing from the roster")]
    MissingCurrentUser {
        /// The dangling id.
        id: String,
    },

    /// An edge endpoint is not part of the roster.
    #[error("edge {index} references unknown user '{id}'")]
    UnknownEdgeEndpoint {
        /// Position of the edge in the list.
        index: usize,
        /// The dangling id.
        id: String,
    },
}

/// Validated initial state for a store.
///
/// ## Invariants
/// - roster ids are unique;
/// - the current user is in the roster;
/// - every edge endpoint is in the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialGraphSeed {
    current_user_id: UserId,
    users: Vec<User>,
    edges: Vec<Edge>,
    recommendations: Vec<Recommendation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
struct RawSeed {
    version: u32,
    current_user_id: UserId,
    users: Vec<User>,
    #[serde(default)]
    edges: Vec<Edge>,
    #[serde(default)]
    recommendations: Vec<Recommendation>,
}

impl SocialGraphSeed {
    /// Build a seed from parts, checking roster integrity.
    pub fn try_new(
        current_user_id: UserId,
        users: Vec<User>,
        edges: Vec<Edge>,
        recommendations: Vec<Recommendation>,
    ) -> Result<Self, SeedError> {
        let mut known = HashSet::with_capacity(users.len());
        for user in &users {
            if !known.insert(user.id()) {
                return Err(SeedError::DuplicateUser {
                    id: user.id().to_string(),
                });
            }
        }

        if !known.contains(&current_user_id) {
            return Err(SeedError::MissingCurrentUser {
                id: current_user_id.to_string(),
            });
        }

        for (index, edge) in edges.iter().enumerate() {
            for endpoint in [&edge.a, &edge.b] {
                if !known.contains(endpoint) {
                    return Err(SeedError::UnknownEdgeEndpoint {
                        index,
                        id: endpoint.to_string(),
                    });
                }
            }
        }

        Ok(Self {
            current_user_id,
            users,
            edges,
            recommendations,
        })
    }

    /// The dataset bundled with the crate: Jack and six acquaintances.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled fixture is edited into an invalid state.
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_json(BUILTIN_SEED)
    }

    /// Parse and validate a seed from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] for malformed JSON, invalid domain values, an
    /// unsupported version, or a broken roster.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let raw: RawSeed = serde_json::from_str(json).map_err(|e| SeedError::Parse {
            message: e.to_string(),
        })?;

        if raw.version != SUPPORTED_VERSION {
            return Err(SeedError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        Self::try_new(
            raw.current_user_id,
            raw.users,
            raw.edges,
            raw.recommendations,
        )
    }

    /// Load a seed from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let io_error = |message: String| SeedError::Io {
            path: path.to_path_buf(),
            message,
        };
        let parent = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file_name = path
            .file_name()
            .ok_or_else(|| io_error("seed path must name a file".to_owned()))?;
        let directory = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|e| io_error(e.to_string()))?;
        let contents = directory
            .read_to_string(Path::new(file_name))
            .map_err(|e| io_error(e.to_string()))?;

        Self::from_json(&contents)
    }

    pub fn current_user_id(&self) -> &UserId {
        &self.current_user_id
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    /// Split into owned parts for the store.
    pub fn into_parts(self) -> (UserId, Vec<User>, Vec<Edge>, Vec<Recommendation>) {
        (
            self.current_user_id,
            self.users,
            self.edges,
            self.recommendations,
        )
    }
}
