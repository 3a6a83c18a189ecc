use std::default::Default;

use crate::grid::grid_config::GridConfig;

/// Contains World configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldConfig {
    /// Shape of the chunk grid entities are placed into
    pub grid: GridConfig,
    /// Chunk radius the section writer queries interest with. With `None`
    /// an observer sees exactly the chunks it occupies.
    pub interest_radius: Option<u8>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            interest_radius: None,
        }
    }
}
