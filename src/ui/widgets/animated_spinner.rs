// SPDX-License-Identifier: MPL-2.0
//! Loading spinner drawn on a canvas.
//!
//! The widget itself is stateless: the owning screen keeps the rotation
//! angle, advances it with [`advance`] on every animation tick, and builds a
//! fresh spinner in `view`.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Rotation per animation frame: half a turn per second at 60 FPS.
pub const ROTATION_STEP: f32 = PI / 60.0;

const STROKE_WIDTH: f32 = 4.0;
const ARC_SEGMENTS: u16 = 30;

/// Returns the angle after one more animation frame, wrapped to one turn.
#[must_use]
pub fn advance(rotation: f32) -> f32 {
    (rotation + ROTATION_STEP) % TAU
}

/// A ring with a brighter three-quarter arc rotating around it.
pub struct AnimatedSpinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(Color { a: 0.25, ..self.color }),
        );

        // Start at 12 o'clock and sweep three quarters of a turn
        let start = self.rotation - PI / 2.0;
        let sweep = 1.5 * PI;

        let mut arc = canvas::path::Builder::new();
        arc.move_to(Point::new(
            center.x + radius * start.cos(),
            center.y + radius * start.sin(),
        ));
        for i in 1..=ARC_SEGMENTS {
            let angle = start + sweep * f32::from(i) / f32::from(ARC_SEGMENTS);
            arc.line_to(Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            ));
        }

        frame.stroke(
            &arc.build(),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_forward() {
        assert!(advance(0.0) > 0.0);
    }

    #[test]
    fn advance_wraps_after_full_turn() {
        let mut rotation = 0.0;
        for _ in 0..200 {
            rotation = advance(rotation);
            assert!((0.0..TAU).contains(&rotation));
        }
    }
}
