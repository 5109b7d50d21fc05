use std::time::Duration;

use smallvec::SmallVec;

use crate::core::{ChartKind, PointId};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::{ChartDemoState, DemoConfig, build_frame};

/// Demo state paired with a rendering backend.
///
/// Forwards the screen operations to [`ChartDemoState`] and renders only when
/// the state reported an invalidation since the last draw.
#[derive(Debug)]
pub struct ChartDemo<R: Renderer> {
    renderer: R,
    state: ChartDemoState,
}

impl<R: Renderer> ChartDemo<R> {
    pub fn new(renderer: R, config: DemoConfig) -> ChartResult<Self> {
        Ok(Self {
            renderer,
            state: ChartDemoState::new(config)?,
        })
    }

    #[must_use]
    pub fn from_state(renderer: R, state: ChartDemoState) -> Self {
        Self { renderer, state }
    }

    #[must_use]
    pub fn state(&self) -> &ChartDemoState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ChartDemoState {
        &mut self.state
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn on_appear(&mut self) -> bool {
        self.state.on_appear()
    }

    pub fn select_kind(&mut self, kind: ChartKind) -> bool {
        self.state.select_kind(kind)
    }

    pub fn trigger(&mut self) -> SmallVec<[PointId; 3]> {
        self.state.trigger()
    }

    pub fn advance_by(&mut self, delta: Duration) {
        self.state.advance_by(delta);
    }

    pub fn build_frame(&self) -> ChartResult<RenderFrame> {
        build_frame(&self.state)
    }

    /// Renders unconditionally.
    ///
    /// Pending invalidation is only consumed once the renderer succeeded.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = build_frame(&self.state)?;
        self.renderer.render(&frame)?;
        self.state.take_pending_invalidation();
        Ok(())
    }

    /// Renders only when state changed since the previous draw.
    ///
    /// Returns whether a frame was drawn.
    pub fn render_if_invalidated(&mut self) -> ChartResult<bool> {
        if self.state.pending_invalidation().is_none() {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
