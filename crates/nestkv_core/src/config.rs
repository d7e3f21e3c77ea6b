//! Store configuration.

/// Configuration for creating a store.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of nested open transactions (`None` = unlimited).
    pub max_depth: Option<usize>,

    /// Number of keys to reserve room for in the committed base mapping.
    pub initial_capacity: usize,

    /// Whether to maintain operation counters.
    pub track_stats: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: None,
            initial_capacity: 0,
            track_stats: true,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum transaction nesting depth.
    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Removes any transaction nesting limit.
    #[must_use]
    pub const fn unlimited_depth(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Sets the initial capacity of the base mapping.
    #[must_use]
    pub const fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets whether operation counters are maintained.
    #[must_use]
    pub const fn track_stats(mut self, value: bool) -> Self {
        self.track_stats = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.max_depth.is_none());
        assert_eq!(config.initial_capacity, 0);
        assert!(config.track_stats);
    }

    #[test]
    fn builder_pattern() {
        let config = Config::new()
            .max_depth(8)
            .initial_capacity(128)
            .track_stats(false);

        assert_eq!(config.max_depth, Some(8));
        assert_eq!(config.initial_capacity, 128);
        assert!(!config.track_stats);

        let config = config.unlimited_depth();
        assert!(config.max_depth.is_none());
    }
}
