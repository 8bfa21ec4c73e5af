use crate::draw::{Point, PointStore};
use crate::util;

use super::{PickerState, ToolState};

/// Longest segment the line tool fills. Endpoints are on-canvas, so real
/// lines never come close.
const MAX_LINE_STEPS: f64 = (crate::config::CANVAS_SIZE_RANGE.1 * 2) as f64;

/// What a click did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A point was added
    Inserted,
    /// The point was too close to an existing one
    Suppressed,
    /// First line endpoint recorded
    LineStarted,
    /// Line committed; holds how many new points it added
    LineCommitted(usize),
    /// A point was removed
    Erased,
    /// Nothing near the click to erase
    Missed,
    /// The click lies outside the canvas and was ignored
    OutOfBounds,
}

impl PickerState {
    /// Processes a canvas click at pixel coordinates.
    ///
    /// Clicks outside `0..=canvas_size` on either axis (or non-finite) are
    /// ignored. The position is snapped to the grid first when snapping is
    /// enabled.
    ///
    /// # Behavior
    /// - Point tool: inserts the point (near-duplicates suppressed)
    /// - Line tool, no pending endpoint: records the endpoint
    /// - Line tool, pending endpoint: fills the segment and clears the endpoint
    /// - Erase tool: removes the most recent point near the click
    pub fn on_click(&mut self, x: f64, y: f64) -> ClickOutcome {
        let (width, height) = self.canvas_dims();
        if !(0.0..=width).contains(&x) || !(0.0..=height).contains(&y) {
            log::warn!(
                "Ignoring click at ({}, {}) outside the {}x{} canvas",
                x,
                y,
                width,
                height
            );
            return ClickOutcome::OutOfBounds;
        }

        let mut p = Point::new(x, y);
        if self.settings.grid.snap {
            p = util::snap_to_grid(p, self.settings.grid.size);
        }

        let outcome = match &mut self.tool_state {
            ToolState::Point => {
                if self.points.insert(p) {
                    ClickOutcome::Inserted
                } else {
                    ClickOutcome::Suppressed
                }
            }
            ToolState::Line { pending } => match pending.take() {
                None => {
                    *pending = Some(p);
                    ClickOutcome::LineStarted
                }
                Some(start) => {
                    let added = rasterize_line(&mut self.points, start, p);
                    ClickOutcome::LineCommitted(added)
                }
            },
            ToolState::Erase => match self.points.find_nearest(p) {
                Some(index) => {
                    self.points.remove_at(index);
                    ClickOutcome::Erased
                }
                None => ClickOutcome::Missed,
            },
        };

        log::debug!("Click at ({:.1}, {:.1}): {:?}", p.x, p.y, outcome);
        if matches!(
            outcome,
            ClickOutcome::Inserted
                | ClickOutcome::LineStarted
                | ClickOutcome::LineCommitted(_)
                | ClickOutcome::Erased
        ) {
            self.needs_redraw = true;
        }
        outcome
    }
}

/// Inserts evenly spaced points from `start` to `end`.
///
/// The step count is the larger of |dx| and |dy|, so there is roughly one
/// sample per pixel along the dominant axis before duplicate suppression
/// thins them out. Returns the number of points actually inserted.
///
/// Segments longer than [`MAX_LINE_STEPS`] pixels are refused.
fn rasterize_line(points: &mut PointStore, start: Point, end: Point) -> usize {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let steps = dx.abs().max(dy.abs());
    if steps.is_nan() || steps <= 0.0 {
        return 0;
    }
    if steps > MAX_LINE_STEPS {
        log::warn!("Line spans {:.0}px, longer than any canvas; skipping", steps);
        return 0;
    }

    let step_x = dx / steps;
    let step_y = dy / steps;
    let mut added = 0;

    for i in 0..=steps.floor() as usize {
        let t = i as f64;
        if points.insert(Point::new(start.x + step_x * t, start.y + step_y * t)) {
            added += 1;
        }
    }
    added
}
