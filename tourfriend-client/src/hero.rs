use std::time::Duration;

use tokio::time::Instant;

pub const HERO_WORDS: [&str; 5] = ["Amazing", "Incredible", "Beautiful", "Magical", "Stunning"];
pub const ROTATION_INTERVAL: Duration = Duration::from_secs(2);

/// Highlighted word in the hero headline, advancing every
/// [`ROTATION_INTERVAL`] since the page opened.
#[derive(Debug, Clone)]
pub struct WordRotator {
    opened_at: Instant,
}

impl Default for WordRotator {
    fn default() -> Self {
        Self::new()
    }
}

impl WordRotator {
    pub fn new() -> Self {
        Self {
            opened_at: Instant::now(),
        }
    }

    pub fn current(&self) -> &'static str {
        Self::word_at(self.opened_at.elapsed())
    }

    /// Word shown after `elapsed` time on the page. Wraps after the last.
    pub fn word_at(elapsed: Duration) -> &'static str {
        let ticks = elapsed.as_millis() / ROTATION_INTERVAL.as_millis();
        HERO_WORDS[(ticks % HERO_WORDS.len() as u128) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_rotation_wraps() {
        let rotator = WordRotator::new();
        assert_eq!(rotator.current(), "Amazing");

        tokio::time::advance(Duration::from_secs(8)).await;
        assert_eq!(rotator.current(), "Stunning");

        tokio::time::advance(ROTATION_INTERVAL).await;
        assert_eq!(rotator.current(), "Amazing");
    }

    #[test]
    fn test_word_at() {
        assert_eq!(WordRotator::word_at(Duration::from_millis(1999)), "Amazing");
        assert_eq!(WordRotator::word_at(Duration::from_secs(2)), "Incredible");
        assert_eq!(WordRotator::word_at(Duration::from_secs(10)), "Amazing");
    }
}
