use std::cmp::max;

/// Statistics about the current session
#[derive(Default, Debug)]
pub struct Stats {
    /// Apples eaten since the last reset
    pub apples_eaten: usize,
    pub total_apples_eaten: usize,
    pub resets: usize,
    /// Longest the snake has been
    pub best_length: usize,
}

impl Stats {
    pub fn apple_eaten(&mut self, new_length: usize) {
        self.apples_eaten += 1;
        self.total_apples_eaten += 1;
        self.best_length = max(self.best_length, new_length);
    }

    pub fn snake_reset(&mut self) {
        self.apples_eaten = 0;
        self.resets += 1;
    }

    pub fn summary(&self) -> String {
        format!(
            "apples: {} (total {}), best length: {}, resets: {}",
            self.apples_eaten, self.total_apples_eaten, self.best_length, self.resets,
        )
    }
}

#[test]
fn test_stats_reset_keeps_totals() {
    let mut stats = Stats::default();
    stats.apple_eaten(2);
    stats.apple_eaten(3);
    stats.snake_reset();
    stats.apple_eaten(2);

    assert_eq!(stats.apples_eaten, 1);
    assert_eq!(stats.total_apples_eaten, 3);
    assert_eq!(stats.best_length, 3);
    assert_eq!(stats.resets, 1);
}
