//! Compose a whole sign and commit it in one step.
//!
//! Each call to [`SignRenderer::render`] is one cycle: **Idle → Drawing → Committed**.
//! The frame is rebuilt from the snapshot alone; nothing carries over from the previous
//! cycle. Missing or malformed input short-circuits to a `NO DATA` frame without
//! touching any row.

use log::{debug, info};
use serde_json::Value;

use crate::config::{LayoutConfig, SignConfig};
use crate::color::DIAGNOSTIC_COLOR;
use crate::frame::{DrawOp, Frame, RowFrame, label_from};
use crate::geometry::Geometry;
use crate::row::compose_row;
use crate::snapshot::{RowKey, Snapshot};
use crate::surface::Surface;
use crate::Result;

/// Shown when there is no usable snapshot.
pub const NO_DATA: &str = "NO DATA";

/// Where the renderer is within a cycle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RenderPhase {
    /// Nothing drawn yet, or the last commit failed.
    Idle,
    /// Drawing into the off-screen buffer.
    Drawing,
    /// The last frame is visible.
    Committed,
}

/// Draws arrival snapshots onto a [`Surface`].
pub struct SignRenderer<S> {
    surface: S,
    geometry: Geometry,
    layout: LayoutConfig,
    phase: RenderPhase,
}

impl<S: Surface> SignRenderer<S> {
    /// Create a renderer.
    #[must_use]
    pub const fn new(surface: S, geometry: Geometry, layout: LayoutConfig) -> Self {
        Self {
            surface,
            geometry,
            layout,
            phase: RenderPhase::Idle,
        }
    }

    /// Create a renderer from a loaded configuration.
    #[must_use]
    pub fn from_config(surface: S, config: &SignConfig) -> Self {
        Self::new(surface, config.geometry(), config.layout.clone())
    }

    /// Build the frame for `snapshot` without drawing it.
    #[must_use]
    pub fn compose(&self, snapshot: Option<&Snapshot>) -> Frame {
        let Some(snapshot) = snapshot else {
            return self.compose_diagnostic(NO_DATA);
        };
        Frame::Rows(
            RowKey::ALL
                .into_iter()
                .map(|row| RowFrame {
                    row,
                    ops: compose_row(row, snapshot.arrivals(row), &self.layout, &self.geometry),
                })
                .collect(),
        )
    }

    /// Build a frame that shows only `message`, cut to the geometry's limit.
    #[must_use]
    pub fn compose_diagnostic(&self, message: &str) -> Frame {
        Frame::Diagnostic(DrawOp::Text {
            origin: self.geometry.diagnostic_origin,
            text: label_from(message, self.geometry.diagnostic_max_chars),
            color: DIAGNOSTIC_COLOR,
            font: self.geometry.label_font,
        })
    }

    /// Draw and commit `snapshot`, or `NO DATA` when it is `None`.
    ///
    /// Returns the committed frame.
    ///
    /// # Errors
    ///
    /// Only fails when the surface cannot commit.
    pub fn render(&mut self, snapshot: Option<&Snapshot>) -> Result<Frame> {
        if snapshot.is_none() {
            info!("SignRenderer::render: no snapshot, showing {}", NO_DATA);
        }
        let frame = self.compose(snapshot);
        self.commit_frame(frame)
    }

    /// Interpret a decoded JSON document and render it.
    ///
    /// `None`, `null`, and documents without a `rows` object all render `NO DATA`.
    ///
    /// # Errors
    ///
    /// Only fails when the surface cannot commit.
    pub fn render_json(&mut self, value: Option<&Value>) -> Result<Frame> {
        let snapshot = value.and_then(Snapshot::from_value);
        self.render(snapshot.as_ref())
    }

    /// Draw and commit a diagnostic-only frame.
    ///
    /// # Errors
    ///
    /// Only fails when the surface cannot commit.
    pub fn render_diagnostic(&mut self, message: &str) -> Result<Frame> {
        let frame = self.compose_diagnostic(message);
        self.commit_frame(frame)
    }

    /// Blank the display. Used at shutdown.
    ///
    /// # Errors
    ///
    /// Only fails when the surface cannot commit.
    pub fn clear(&mut self) -> Result<()> {
        self.phase = RenderPhase::Drawing;
        self.surface.clear();
        self.finish_commit()?;
        debug!("SignRenderer::clear: display blanked");
        Ok(())
    }

    fn commit_frame(&mut self, frame: Frame) -> Result<Frame> {
        self.phase = RenderPhase::Drawing;
        self.surface.clear();
        frame.paint(&mut self.surface, &self.geometry);
        self.finish_commit()?;
        debug!(
            "SignRenderer::render: committed {} ops{}",
            frame.ops().count(),
            if frame.is_diagnostic() { " (diagnostic)" } else { "" }
        );
        Ok(frame)
    }

    fn finish_commit(&mut self) -> Result<()> {
        match self.surface.commit() {
            Ok(()) => {
                self.phase = RenderPhase::Committed;
                Ok(())
            }
            Err(err) => {
                self.phase = RenderPhase::Idle;
                Err(err)
            }
        }
    }

    /// Where the renderer is within a cycle.
    #[must_use]
    pub const fn phase(&self) -> RenderPhase {
        self.phase
    }

    /// The geometry in use.
    #[must_use]
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// The row layout in use.
    #[must_use]
    pub const fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// The surface being drawn on.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface.
    pub const fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Give back the surface.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}
