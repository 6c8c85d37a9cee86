//! Render throttle: skip frames when nothing changed.

/// Default refresh interval for frames whose game revision did not move
pub const STATIC_REFRESH_MS: u64 = 250;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_revision: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_revision: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// Renders immediately when `revision` changes, otherwise at most once per
    /// `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, revision: u64) -> bool {
        let due = !self.has_rendered
            || revision != self.last_revision
            || now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;

        if due {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_revision = revision;
        }
        due
    }

    /// Make the next call render regardless (screen switch, resize)
    pub fn force(&mut self) {
        self.has_rendered = false;
    }
}

impl Default for RenderThrottle {
    fn default() -> Self {
        Self::new(STATIC_REFRESH_MS)
    }
}
