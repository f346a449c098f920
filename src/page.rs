use crate::content::PROJECTS;
use crate::hover::{HoverError, HoveredProject};
use crate::motion::{Emphasis, Entrance, HEADING_DELAY_MS, SUBTITLE_DELAY_MS};

/// Interaction and animation state behind the portfolio view.
///
/// One instance lives for as long as the view is mounted. Pointer events and
/// frame ticks go in, inline styles come out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortfolioState {
    hovered: HoveredProject,
    emphasis: Emphasis,
    heading: Entrance,
    subtitle: Entrance,
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self {
            hovered: HoveredProject::default(),
            emphasis: Emphasis::default(),
            heading: Entrance::slide_down(HEADING_DELAY_MS),
            subtitle: Entrance::fade_in(SUBTITLE_DELAY_MS),
        }
    }
}

impl PortfolioState {
    pub fn hover_enter(&mut self, index: usize) -> Result<(), HoverError> {
        self.hovered.enter(index, PROJECTS.len())?;
        self.emphasis.set_active(true);
        Ok(())
    }

    pub fn hover_leave(&mut self) {
        self.hovered.leave();
        self.emphasis.set_active(false);
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered.index()
    }

    pub fn is_emphasis_active(&self) -> bool {
        self.emphasis.is_active()
    }

    pub fn is_card_emphasized(&self, card: usize) -> bool {
        self.hovered.emphasizes(card)
    }

    pub fn is_animating(&self) -> bool {
        !(self.emphasis.is_finished() && self.heading.is_finished() && self.subtitle.is_finished())
    }

    pub fn tick(&mut self, dt_ms: f64) {
        self.emphasis.advance(dt_ms);
        self.heading.advance(dt_ms);
        self.subtitle.advance(dt_ms);
    }

    /// Jump every animation to its end state.
    pub fn settle(&mut self) {
        self.emphasis.finish();
        self.heading.finish();
        self.subtitle.finish();
    }

    pub fn heading_style(&self) -> String {
        self.heading.style()
    }

    pub fn subtitle_style(&self) -> String {
        self.subtitle.style()
    }

    pub fn card_style(&self) -> String {
        self.emphasis.style()
    }
}
