/// Offset past which the scroll-to-top button shows.
pub const SCROLL_THRESHOLD: f64 = 300.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollToTop {
    visible: bool,
}

impl ScrollToTop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates visibility from the current vertical offset.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.visible = offset > SCROLL_THRESHOLD;
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        let mut button = ScrollToTop::new();
        assert!(!button.on_scroll(300.0));
        assert!(button.on_scroll(300.5));
        assert!(button.is_visible());
        assert!(!button.on_scroll(0.0));
    }
}
