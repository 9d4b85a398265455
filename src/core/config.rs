//! Game configuration.
//!
//! A `GameConfig` is everything a front-end supplies to start a game:
//! which board layout to use, how the deal is generated, and the RNG
//! seed. The engine never reads configuration from anywhere else.

use serde::{Deserialize, Serialize};

/// Name of the layout used when none is configured.
pub const DEFAULT_LAYOUT: &str = "turtle";

/// How the initial tile placement is generated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealPolicy {
    /// Uniform random shuffle over all positions. May produce boards
    /// with no complete solution.
    Random,
    /// Constructive deal placing tiles in matched pairs in
    /// reverse-removal order, so at least one full solution exists.
    #[default]
    Solvable,
}

/// Configuration for a new game session.
///
/// ## Example
///
/// ```
/// use mahjongg_engine::core::{DealPolicy, GameConfig};
///
/// let config = GameConfig::new(42)
///     .with_layout("pyramid")
///     .with_policy(DealPolicy::Random);
///
/// assert_eq!(config.layout_name, "pyramid");
/// assert_eq!(config.seed, 42);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name of the board layout template.
    pub layout_name: String,

    /// Deal generation policy.
    pub deal_policy: DealPolicy,

    /// RNG seed; the whole game is reproducible from it.
    pub seed: u64,
}

impl GameConfig {
    /// Create a configuration with the default layout and deal policy.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            layout_name: DEFAULT_LAYOUT.to_string(),
            deal_policy: DealPolicy::default(),
            seed,
        }
    }

    /// Set the board layout by template name.
    #[must_use]
    pub fn with_layout(mut self, name: impl Into<String>) -> Self {
        self.layout_name = name.into();
        self
    }

    /// Set the deal generation policy.
    #[must_use]
    pub fn with_policy(mut self, policy: DealPolicy) -> Self {
        self.deal_policy = policy;
        self
    }
}
