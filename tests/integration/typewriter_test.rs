//! Typewriter driven end to end through the public API

use std::time::{Duration, Instant};

use herotype::render::{LineMode, LineWriter};
use herotype::typewriter::{
    self, CancelToken, Clock, RoleList, RunLimit, StopReason, Timings, Typewriter,
};

use crate::helpers::ManualClock;

fn frames_for(roles: &[&str], cycles: u64) -> Vec<String> {
    let roles = RoleList::new(roles.iter().copied()).unwrap();
    let clock = ManualClock::new();
    let mut machine =
        Typewriter::start(roles, Timings::default(), Some(Vec::new()), clock.now()).unwrap();
    typewriter::run(&mut machine, &clock, &CancelToken::new(), RunLimit::Cycles(cycles));
    machine.into_target()
}

#[test]
fn two_role_cycle_matches_expected_sequence() {
    let frames = frames_for(&["A", "BC"], 1);
    assert_eq!(frames, vec!["A", "", "B", "BC", "B", ""]);
}

#[test]
fn every_frame_is_a_prefix_of_some_role() {
    let roles = ["Rust Developer", "Ferris 🦀 fan", "ß"];
    let frames = frames_for(&roles, 2);

    assert!(!frames.is_empty());
    for frame in &frames {
        assert!(
            roles.iter().any(|role| role.starts_with(frame.as_str())),
            "{frame:?} is not a prefix of any role"
        );
    }
}

#[test]
fn consecutive_frames_differ_by_one_character() {
    let frames = frames_for(&["abc", "de", "f"], 3);

    let mut previous = String::new();
    for frame in &frames {
        let a = previous.chars().count();
        let b = frame.chars().count();
        assert_eq!(a.abs_diff(b), 1, "{previous:?} -> {frame:?}");
        previous = frame.clone();
    }
}

#[test]
fn roles_appear_fully_typed_in_order() {
    let roles = ["one", "two", "three"];
    let frames = frames_for(&roles, 2);

    let full: Vec<&str> = frames
        .iter()
        .map(String::as_str)
        .filter(|frame| roles.contains(frame))
        .collect();
    assert_eq!(full, vec!["one", "two", "three", "one", "two", "three"]);
}

#[test]
fn line_writer_receives_typewriter_frames() {
    let roles = RoleList::new(["Hi"]).unwrap();
    let now = Instant::now();
    let writer = LineWriter::new(Vec::new(), LineMode::Lines);
    let mut machine = Typewriter::start(roles, Timings::instant(), Some(writer), now).unwrap();

    for _ in 0..4 {
        assert!(machine.poll(now));
    }
    machine.cancel();

    let out = String::from_utf8(machine.into_target().into_inner()).unwrap();
    assert_eq!(out, "H\nHi\nH\n\n");
}

#[test]
fn cancel_from_another_thread_stops_the_driver() {
    let roles = RoleList::new(["Forever"]).unwrap();
    let timings = Timings {
        type_interval: Duration::from_millis(5),
        hold_after_typing: Duration::from_millis(5),
        erase_interval: Duration::from_millis(5),
        hold_after_erasing: Duration::from_millis(5),
    };
    let mut machine = Typewriter::start(roles, timings, Some(Vec::new()), Instant::now()).unwrap();
    let cancel = CancelToken::new();

    let canceller = {
        let cancel = cancel.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(60));
            cancel.cancel();
        })
    };

    let summary = typewriter::run(
        &mut machine,
        &typewriter::SystemClock,
        &cancel,
        RunLimit::Forever,
    );
    canceller.join().unwrap();

    assert_eq!(summary.reason, StopReason::Cancelled);
    assert!(machine.is_cancelled());
    let rendered = machine.target().len();
    assert!(!machine.poll(Instant::now() + Duration::from_secs(60)));
    assert_eq!(machine.target().len(), rendered);
}
