/// Vertical scroll position of a line-based view
///
/// Bounds are refreshed on every render from the current content height, so
/// a shrinking view (new filter, reload) never leaves the offset past the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: usize,
    pub max_offset: usize,
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offsets are line indices into the full content, not ratatui's u16
    /// paragraph scroll; views slice their own window from them.
    pub fn update_bounds(&mut self, content_lines: usize, viewport_height: u16) {
        self.viewport_height = viewport_height;
        self.max_offset = content_lines.saturating_sub(viewport_height as usize);
        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    /// One viewport minus a line of overlap
    pub fn page_down(&mut self) {
        self.scroll_down(self.page_step());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page_step());
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    fn page_step(&self) -> usize {
        self.viewport_height.saturating_sub(1).max(1) as usize
    }
}
