// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use chrono::NaiveTime;
use clock_picker::clock::{self, AnalogClock, ClockOptions, Handle};
use clock_picker::form::{Form, Forms};
use clock_picker::geometry::Point;
use clock_picker::picker::{self, ClockPicker, PickedTime, PickerOptions};
use clock_picker::time_input;

fn time_form(id: &str) -> Form {
    Form::new(id)
        .with_text("hours", "")
        .with_text("minutes", "")
        .with_toggle("meridian", false)
}

fn bound_picker(now: NaiveTime) -> (ClockPicker, Forms) {
    let mut forms = Forms::new().with(time_form("time"));
    let picker = ClockPicker::new("#time", &PickerOptions::default(), &mut forms, now);
    (picker, forms)
}

fn field<'a>(forms: &'a Forms, name: &str) -> Option<&'a str> {
    forms.query("#time").and_then(|form| form.text(name))
}

fn clock_message(message: clock::Message) -> picker::Message {
    picker::Message::Clock(message)
}

fn input_message(message: time_input::Message) -> picker::Message {
    picker::Message::Input(message)
}

#[test]
fn hours_map_to_thirty_degree_steps() {
    let mut clock = AnalogClock::new(&ClockOptions::default());
    clock.set_current_handle(Handle::Hours);

    for hours in 0..=12 {
        clock.update_time(hours);
        #[allow(clippy::cast_precision_loss)]
        let expected = (hours * 30 % 360) as f32;
        assert_abs_diff_eq!(clock.angle(), expected);

        let expected_value = if hours == 0 { 12 } else { hours };
        assert_eq!(clock.reading().value, format!("{expected_value:02}"));
    }
}

#[test]
fn minutes_snap_to_five_minute_marks_and_round_trip() {
    let mut clock = AnalogClock::new(&ClockOptions::default());
    clock.set_current_handle(Handle::Minutes);

    for minutes in 0..60 {
        clock.update_time(minutes);
        let angle = clock.angle();
        let reported: u32 = clock.reading().value.parse().unwrap();
        assert_eq!(reported % 5, 0, "{minutes} reported as {reported}");
        assert!(reported.abs_diff(minutes) <= 3 || minutes >= 58 && reported == 0);

        clock.update_time(reported);
        assert_abs_diff_eq!(clock.angle(), angle);
    }
}

#[test]
fn typing_thirteen_hours_stores_twelve() {
    let (mut picker, mut forms) = bound_picker(NaiveTime::from_hms_opt(9, 0, 0).unwrap());

    picker.update(input_message(time_input::Message::Focused(Handle::Hours)), &mut forms);
    let event = picker.update(
        input_message(time_input::Message::Input(Handle::Hours, "13".to_string())),
        &mut forms,
    );

    assert_eq!(event, picker::Event::None);
    assert_eq!(field(&forms, "hours"), Some("12"));
    assert_abs_diff_eq!(picker.clock().rotation(Handle::Hours), 0.0);
}

#[test]
fn typing_seventy_five_minutes_resets_to_zero() {
    let (mut picker, mut forms) = bound_picker(NaiveTime::from_hms_opt(9, 20, 0).unwrap());

    picker.update(input_message(time_input::Message::Focused(Handle::Minutes)), &mut forms);
    picker.update(
        input_message(time_input::Message::Input(Handle::Minutes, "75".to_string())),
        &mut forms,
    );

    assert_eq!(field(&forms, "minutes"), Some("00"));
}

#[test]
fn dragging_hours_left_of_center_lands_on_the_left_half() {
    let mut clock = AnalogClock::new(&ClockOptions::default());
    clock.begin_drag(Handle::Hours);

    // Default face is 240px wide, centered on (120, 120).
    for point in [
        Point::new(20.0, 120.0),
        Point::new(60.0, 220.0),
        Point::new(110.0, 230.0),
        Point::new(40.0, 60.0),
    ] {
        let change = clock.drag_to(point).expect("drag reports a change");
        assert_eq!(change.handle, Handle::Hours);
        assert!(
            (180.0..360.0).contains(&clock.angle()),
            "{point} gave {}",
            clock.angle()
        );
    }
}

#[test]
fn drag_rewrites_the_matching_field() {
    let (mut picker, mut forms) = bound_picker(NaiveTime::from_hms_opt(10, 10, 0).unwrap());

    picker.update(clock_message(clock::Message::HandPressed(Handle::Minutes)), &mut forms);
    let event = picker.update(
        clock_message(clock::Message::PointerMoved(Point::new(120.0, 230.0))),
        &mut forms,
    );
    picker.update(clock_message(clock::Message::PointerReleased), &mut forms);

    match event {
        picker::Event::ClockChanged(change) => {
            assert_eq!(change.handle, Handle::Minutes);
            assert_eq!(change.value, "30");
        }
        other => panic!("expected a clock change, got {other:?}"),
    }
    assert_eq!(field(&forms, "minutes"), Some("30"));
    assert_eq!(field(&forms, "hours"), Some("10"));
}

#[test]
fn focusing_minutes_routes_updates_to_the_minutes_hand() {
    let (mut picker, mut forms) = bound_picker(NaiveTime::from_hms_opt(3, 0, 0).unwrap());
    let hours_before = picker.clock().rotation(Handle::Hours);

    picker.update(input_message(time_input::Message::Focused(Handle::Minutes)), &mut forms);
    picker.update(
        input_message(time_input::Message::Input(Handle::Minutes, "45".to_string())),
        &mut forms,
    );

    assert_eq!(picker.clock().current_handle(), Handle::Minutes);
    assert_abs_diff_eq!(picker.clock().rotation(Handle::Minutes), 270.0);
    assert_abs_diff_eq!(picker.clock().rotation(Handle::Hours), hours_before);
}

#[test]
fn unmatched_selector_binds_nothing() {
    let mut forms = Forms::new().with(time_form("time"));
    let mut picker = ClockPicker::new(
        "#alarm",
        &PickerOptions::default(),
        &mut forms,
        NaiveTime::from_hms_opt(8, 15, 0).unwrap(),
    );

    assert!(!picker.input().is_bound());
    assert_eq!(field(&forms, "hours"), Some(""));

    picker.update(
        input_message(time_input::Message::Input(Handle::Hours, "5".to_string())),
        &mut forms,
    );
    assert_eq!(field(&forms, "hours"), Some(""));
    assert_eq!(picker.value(&forms), None);
}

#[test]
fn empty_form_binds_nothing() {
    let mut forms = Forms::new().with(Form::new("time"));
    let picker = ClockPicker::new(
        "#time",
        &PickerOptions::default(),
        &mut forms,
        NaiveTime::from_hms_opt(8, 15, 0).unwrap(),
    );
    assert!(!picker.input().is_bound());
}

#[test]
fn seeding_reflects_wall_clock_time() {
    let (picker, forms) = bound_picker(NaiveTime::from_hms_opt(19, 35, 0).unwrap());

    assert_eq!(
        picker.value(&forms),
        Some(PickedTime {
            hours: 7,
            minutes: 35,
            pm: true,
        })
    );
    assert_abs_diff_eq!(picker.clock().rotation(Handle::Hours), 210.0);
    assert_eq!(picker.clock().current_handle(), Handle::Minutes);
}

#[test]
fn meridian_toggle_updates_the_form() {
    let (mut picker, mut forms) = bound_picker(NaiveTime::from_hms_opt(6, 0, 0).unwrap());
    picker.update(input_message(time_input::Message::MeridianToggled(true)), &mut forms);

    let value = picker.value(&forms).expect("form is bound");
    assert!(value.pm);
    assert_eq!(value.to_naive_time(), NaiveTime::from_hms_opt(18, 0, 0));
}

#[test]
fn custom_field_names_are_threaded_through() {
    let mut forms = Forms::new().with(
        Form::new("alarm")
            .with_text("h", "")
            .with_text("m", "")
            .with_toggle("ampm", false),
    );
    let options = PickerOptions {
        fields: time_input::FieldNames {
            hours: "h".to_string(),
            minutes: "m".to_string(),
            meridian: "ampm".to_string(),
        },
        ..PickerOptions::default()
    };
    let picker = ClockPicker::new(
        "alarm",
        &options,
        &mut forms,
        NaiveTime::from_hms_opt(13, 5, 0).unwrap(),
    );

    let form = forms.query("#alarm").unwrap();
    assert!(picker.input().is_bound());
    assert_eq!(form.text("h"), Some("01"));
    assert_eq!(form.text("m"), Some("05"));
    assert_eq!(form.toggle("ampm"), Some(true));
}

#[test]
fn seconds_hand_runs_only_between_start_and_stop() {
    let (mut picker, mut forms) = bound_picker(NaiveTime::from_hms_opt(1, 0, 0).unwrap());
    picker.update(clock_message(clock::Message::SecondsTick), &mut forms);
    assert_abs_diff_eq!(picker.clock().rotation(Handle::Seconds), 0.0);

    picker.update(clock_message(clock::Message::StartSeconds), &mut forms);
    picker.update(clock_message(clock::Message::SecondsTick), &mut forms);
    picker.update(clock_message(clock::Message::SecondsTick), &mut forms);
    assert_abs_diff_eq!(picker.clock().rotation(Handle::Seconds), 60.0);

    picker.update(clock_message(clock::Message::StopSeconds), &mut forms);
    picker.update(clock_message(clock::Message::SecondsTick), &mut forms);
    assert_abs_diff_eq!(picker.clock().rotation(Handle::Seconds), 60.0);
}
