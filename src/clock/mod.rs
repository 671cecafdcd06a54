// SPDX-License-Identifier: MPL-2.0
//! Analog clock state: hand selection, angle computation and drag sessions.
//!
//! The clock tracks a single scalar angle for whichever hand is currently
//! selected. Moving the hours hand does not recompute the minutes hand and
//! vice versa; each hand simply keeps the rotation it was last given.
//!
//! Changes made by dragging produce an [`Event::Changed`] carrying a
//! [`ClockChange`]. Values pushed in with [`AnalogClock::update_time`] only
//! rotate the hand and never produce an event.

mod handle;
mod layout;
mod ticker;

pub use handle::Handle;
pub use layout::{ClockLayout, HIT_TOLERANCE};
pub use ticker::{SecondsTicker, TICK_INTERVAL};

use crate::format::format_digit;
use crate::geometry::Point;
use iced::Subscription;

/// Number of discrete positions on the face.
pub const NUM_STEPS: u32 = 12;

/// Angular distance between two adjacent positions (360° / 12).
pub const STEP_DEGREES: f32 = 360.0 / NUM_STEPS as f32;

/// Options the clock is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockOptions {
    /// Face diameter in pixels.
    pub diameter: f32,
    /// Hours hand length as a fraction of the radius.
    pub hour_hand_ratio: f32,
    /// Minutes hand length as a fraction of the radius.
    pub minute_hand_ratio: f32,
    /// Start the seconds hand animation on construction.
    pub seconds_hand: bool,
}

impl Default for ClockOptions {
    fn default() -> Self {
        Self {
            diameter: 240.0,
            hour_hand_ratio: 0.5,
            minute_hand_ratio: 0.8,
            seconds_hand: false,
        }
    }
}

/// Rotation (degrees, clockwise from 12 o'clock) last applied to each hand.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandRotations {
    pub hours: f32,
    pub minutes: f32,
    pub seconds: f32,
}

impl HandRotations {
    #[must_use]
    pub fn get(&self, handle: Handle) -> f32 {
        match handle {
            Handle::Hours => self.hours,
            Handle::Minutes => self.minutes,
            Handle::Seconds => self.seconds,
        }
    }

    fn set(&mut self, handle: Handle, degrees: f32) {
        match handle {
            Handle::Hours => self.hours = degrees,
            Handle::Minutes => self.minutes = degrees,
            Handle::Seconds => self.seconds = degrees,
        }
    }
}

/// Notification payload emitted when a drag changes the time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockChange {
    pub handle: Handle,
    /// Two-digit value: `"01"`..`"12"` for hours, `"00"`..`"55"` for minutes.
    pub value: String,
}

/// Input consumed by [`AnalogClock::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Primary button pressed over a hand.
    HandPressed(Handle),
    /// Pointer moved, in clock face coordinates.
    PointerMoved(Point),
    /// Primary button released.
    PointerReleased,
    /// Pointer left the window while a drag may be active.
    PointerCancelled,
    /// One-second timer fired.
    SecondsTick,
    StartSeconds,
    StopSeconds,
}

/// Events propagated to the owner of the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Changed(ClockChange),
}

/// Analog clock face state.
#[derive(Debug, Clone)]
pub struct AnalogClock {
    layout: ClockLayout,
    step: f32,
    angle: f32,
    current: Handle,
    rotations: HandRotations,
    dragging: bool,
    ticker: SecondsTicker,
}

impl AnalogClock {
    /// Builds a clock from its options. The layout is fixed from here on.
    #[must_use]
    pub fn new(options: &ClockOptions) -> Self {
        let mut ticker = SecondsTicker::default();
        if options.seconds_hand {
            ticker.start();
        }

        Self {
            layout: ClockLayout::new(
                options.diameter,
                options.hour_hand_ratio,
                options.minute_hand_ratio,
            ),
            step: STEP_DEGREES,
            angle: 0.0,
            current: Handle::Minutes,
            rotations: HandRotations::default(),
            dragging: false,
            ticker,
        }
    }

    #[must_use]
    pub fn layout(&self) -> &ClockLayout {
        &self.layout
    }

    /// Angle (degrees) last applied to the current hand.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[must_use]
    pub fn current_handle(&self) -> Handle {
        self.current
    }

    #[must_use]
    pub fn rotations(&self) -> &HandRotations {
        &self.rotations
    }

    #[must_use]
    pub fn rotation(&self, handle: Handle) -> f32 {
        self.rotations.get(handle)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub fn seconds_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Selects the hand subsequent operations act on.
    ///
    /// Only `Hours` selects the hours hand; anything else selects minutes.
    pub fn set_current_handle(&mut self, handle: Handle) {
        self.current = match handle {
            Handle::Hours => Handle::Hours,
            Handle::Minutes | Handle::Seconds => Handle::Minutes,
        };
        log::debug!("current clock handle: {}", self.current);
    }

    /// Rotates the current hand to show `value`.
    ///
    /// Hours map to `value * 30°`. Minutes map onto the same twelve
    /// positions, so they snap to the nearest five-minute mark.
    pub fn update_time(&mut self, value: u32) {
        #[allow(clippy::cast_precision_loss)]
        let value = value as f32;
        let angle = match self.current {
            Handle::Hours => value * self.step,
            Handle::Minutes | Handle::Seconds => {
                (value / 60.0 * NUM_STEPS as f32).round() * self.step
            }
        };
        self.set_angle(angle);
    }

    /// Clock angle for a pointer at `point`, measured between the current
    /// hand's resting tip and the pointer around the clock center.
    ///
    /// The result is mirrored when the pointer is left of the center, rounded
    /// to the nearest step and normalized to `[0, 360)`. Returns `None` when
    /// the pointer sits exactly on the center.
    #[must_use]
    pub fn angle_at(&self, point: Point) -> Option<f32> {
        let center = self.layout.center();
        let u = self.layout.base(self.current).subtract(center);
        let v = point.subtract(center);

        let magnitude = u.length() * v.length();
        if magnitude <= f32::EPSILON {
            return None;
        }

        let cosine = (u.dot(v) / magnitude).clamp(-1.0, 1.0);
        let mut angle = cosine.acos().to_degrees();

        // left side
        if point.x < center.x {
            angle = 360.0 - angle;
        }

        let angle = (angle / self.step).round() * self.step;
        Some(angle.rem_euclid(360.0))
    }

    /// Selectable hand drawn under `point`.
    #[must_use]
    pub fn handle_at(&self, point: Point) -> Option<Handle> {
        self.layout.handle_at(point, &self.rotations)
    }

    /// Change notification describing the current hand and angle.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn reading(&self) -> ClockChange {
        match self.current {
            Handle::Hours => {
                let time = (self.angle / self.step).round() as u32;
                ClockChange {
                    handle: Handle::Hours,
                    value: format_digit(if time == 0 { 12 } else { time }),
                }
            }
            Handle::Minutes | Handle::Seconds => {
                let time = (self.angle * 60.0 / (NUM_STEPS as f32 * self.step)).round() as u32;
                ClockChange {
                    handle: Handle::Minutes,
                    value: format_digit(if time == 60 { 0 } else { time }),
                }
            }
        }
    }

    /// Starts dragging `handle`, making it the current hand.
    pub fn begin_drag(&mut self, handle: Handle) {
        self.set_current_handle(handle);
        self.dragging = true;
        log::debug!("drag started on {} hand", self.current);
    }

    /// Follows the pointer during a drag. Returns the change notification for
    /// every move handled while dragging.
    pub fn drag_to(&mut self, point: Point) -> Option<ClockChange> {
        if !self.dragging {
            return None;
        }
        let angle = self.angle_at(point)?;
        self.set_angle(angle);
        Some(self.reading())
    }

    /// Ends the drag session on pointer release.
    pub fn end_drag(&mut self) {
        if self.dragging {
            log::debug!("drag ended at {}°", self.angle);
        }
        self.dragging = false;
    }

    /// Ends the drag session when the pointer is lost.
    pub fn cancel_drag(&mut self) {
        if self.dragging {
            log::debug!("drag cancelled at {}°", self.angle);
        }
        self.dragging = false;
    }

    pub fn start_seconds(&mut self) {
        self.ticker.start();
        log::debug!("seconds hand started");
    }

    pub fn stop_seconds(&mut self) {
        self.ticker.stop();
        log::debug!("seconds hand stopped");
    }

    /// Advances the seconds hand by one step.
    pub fn tick_seconds(&mut self) {
        self.rotations.seconds = (self.rotations.seconds + self.step).rem_euclid(360.0);
    }

    /// Processes a clock message.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::HandPressed(handle) => {
                self.begin_drag(handle);
                Event::None
            }
            Message::PointerMoved(point) => match self.drag_to(point) {
                Some(change) => Event::Changed(change),
                None => Event::None,
            },
            Message::PointerReleased => {
                self.end_drag();
                Event::None
            }
            Message::PointerCancelled => {
                self.cancel_drag();
                Event::None
            }
            Message::SecondsTick => {
                if self.ticker.is_running() {
                    self.tick_seconds();
                }
                Event::None
            }
            Message::StartSeconds => {
                self.start_seconds();
                Event::None
            }
            Message::StopSeconds => {
                self.stop_seconds();
                Event::None
            }
        }
    }

    /// One-second timer driving the seconds hand while the ticker runs.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.ticker.is_running() {
            iced::time::every(TICK_INTERVAL).map(|_| Message::SecondsTick)
        } else {
            Subscription::none()
        }
    }

    fn set_angle(&mut self, value: f32) {
        let value = value.rem_euclid(360.0);
        self.rotations.set(self.current, value);
        self.angle = value;
    }
}
