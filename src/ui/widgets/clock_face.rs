// SPDX-License-Identifier: MPL-2.0
//! Canvas rendering of the analog clock and pointer handling for its hands.
//!
//! Pressing the primary button over a hand starts a drag. While dragging,
//! every cursor move is reported in face coordinates, including moves outside
//! the face, until the button is released or the cursor leaves the window.

use crate::clock::{AnalogClock, ClockLayout, HandRotations, Handle, Message, NUM_STEPS};
use crate::geometry::Point;
use crate::ui::design_tokens::{border, sizing};
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, LineCap, Path, Stroke};
use iced::{mouse, Element, Length, Rectangle, Renderer, Theme};

/// Snapshot of the clock state drawn by the canvas.
#[derive(Debug, Clone)]
pub struct ClockFace {
    layout: ClockLayout,
    rotations: HandRotations,
    current: Handle,
    dragging: bool,
    colors: ColorScheme,
}

impl ClockFace {
    #[must_use]
    pub fn new(clock: &AnalogClock, colors: ColorScheme) -> Self {
        Self {
            layout: *clock.layout(),
            rotations: *clock.rotations(),
            current: clock.current_handle(),
            dragging: clock.is_dragging(),
            colors,
        }
    }

    /// Creates a fixed-size canvas element drawing this face.
    pub fn into_element<'a>(self) -> Element<'a, Message> {
        let size = self.layout.diameter();
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    /// Cursor position relative to the face origin, even outside the face.
    fn face_position(cursor: mouse::Cursor, bounds: Rectangle) -> Option<Point> {
        cursor
            .position()
            .map(|position| Point::new(position.x - bounds.x, position.y - bounds.y))
    }

    fn hand_under_cursor(&self, cursor: mouse::Cursor, bounds: Rectangle) -> Option<Handle> {
        let position = cursor.position_in(bounds)?;
        self.layout.handle_at(position.into(), &self.rotations)
    }

    /// Maps a window event to the clock message it triggers, if any.
    fn message_for(
        &self,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Message> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => self
                .hand_under_cursor(cursor, bounds)
                .map(Message::HandPressed),
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) if self.dragging => {
                Self::face_position(cursor, bounds).map(Message::PointerMoved)
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if self.dragging =>
            {
                Some(Message::PointerReleased)
            }
            // If cursor leaves the window, end any drag operation
            iced::Event::Mouse(mouse::Event::CursorLeft) if self.dragging => {
                Some(Message::PointerCancelled)
            }
            _ => None,
        }
    }

    fn hand_stroke(&self, handle: Handle) -> Stroke<'static> {
        let (width, color) = match handle {
            Handle::Seconds => (sizing::SECONDS_HAND_WIDTH, self.colors.seconds_hand),
            _ if handle == self.current => (sizing::ACTIVE_HAND_WIDTH, self.colors.active_hand),
            _ => (sizing::HAND_WIDTH, self.colors.hand),
        };
        Stroke::default()
            .with_width(width)
            .with_color(color)
            .with_line_cap(LineCap::Round)
    }
}

impl canvas::Program<Message> for ClockFace {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        self.message_for(event, bounds, cursor)
            .map(|message| Action::publish(message).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center: iced::Point = self.layout.center().into();
        let radius = self.layout.radius();

        // Face
        let rim_width = border::WIDTH_MD;
        let face = Path::circle(center, radius - rim_width);
        frame.fill(&face, self.colors.face);
        frame.stroke(
            &face,
            Stroke::default()
                .with_width(rim_width)
                .with_color(self.colors.rim),
        );

        // Hour marks
        let mark_stroke = Stroke::default()
            .with_width(border::WIDTH_SM)
            .with_color(self.colors.hour_mark);
        for step in 0..NUM_STEPS {
            #[allow(clippy::cast_precision_loss)]
            let radians = (step as f32 / NUM_STEPS as f32) * std::f32::consts::TAU;
            let (sin, cos) = radians.sin_cos();
            let outer = radius - rim_width * 2.0;
            let inner = outer - sizing::TICK_LENGTH;
            let mark = Path::line(
                iced::Point::new(center.x + outer * sin, center.y - outer * cos),
                iced::Point::new(center.x + inner * sin, center.y - inner * cos),
            );
            frame.stroke(&mark, mark_stroke);
        }

        // Hands, the one being set drawn last so it stays on top
        let mut hands = [Handle::Seconds, Handle::Hours, Handle::Minutes];
        hands.sort_by_key(|handle| *handle == self.current);
        for handle in hands {
            let tip = self.layout.tip(handle, self.rotations.get(handle));
            let hand = Path::line(center, tip.into());
            frame.stroke(&hand, self.hand_stroke(handle));
        }

        let dot = Path::circle(center, sizing::CENTER_DOT_RADIUS);
        frame.fill(&dot, self.colors.hand);

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.dragging {
            mouse::Interaction::Grabbing
        } else if self.hand_under_cursor(cursor, bounds).is_some() {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
