// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Add, find and remove events through the booking rules.

use eventorg_core::{Calendar, Department, EventKeyDraft, Location, Rejection, Rules, TimeSlot};

use crate::common::{clock, test_draft, test_key};

#[test]
fn validated_event_can_be_added_and_removed() {
    let rules = Rules::default();
    let mut calendar = Calendar::new();
    let key = test_key(1, TimeSlot::Morning, Location::Hll114);

    let event = rules
        .check_event(&clock(), test_draft(key, Department::Cs, 60))
        .unwrap();
    assert!(!calendar.contains(event.key()));
    assert!(calendar.add(event));
    assert!(calendar.contains(&key));
    assert_eq!(calendar.len(), 1);

    let draft = EventKeyDraft {
        date: key.date,
        start: Some(key.start),
        location: Some(key.location),
    };
    let removal = rules.check_key(&clock(), &draft).unwrap();
    assert!(calendar.remove(&removal));
    assert!(!calendar.contains(&key));
    assert!(calendar.is_empty());
}

#[test]
fn duplicates_are_detected_by_identity_only() {
    let rules = Rules::default();
    let mut calendar = Calendar::new();
    let key = test_key(1, TimeSlot::Afternoon, Location::Ab2225);

    let first = rules
        .check_event(&clock(), test_draft(key, Department::Cs, 60))
        .unwrap();
    calendar.add(first);

    let second = rules
        .check_event(&clock(), test_draft(key, Department::Math, 120))
        .unwrap();
    assert!(calendar.contains(second.key()));

    let elsewhere = test_key(1, TimeSlot::Afternoon, Location::Mu302);
    assert!(!calendar.contains(&elsewhere));
}

#[test]
fn add_then_remove_restores_size() {
    let rules = Rules::default();
    let mut calendar = Calendar::new();
    for day in 1..=5 {
        let key = test_key(day, TimeSlot::Evening, Location::Til232);
        calendar.add(
            rules
                .check_event(&clock(), test_draft(key, Department::Ee, 30))
                .unwrap(),
        );
    }

    let key = test_key(20, TimeSlot::Morning, Location::BeAud);
    let event = rules
        .check_event(&clock(), test_draft(key, Department::Iti, 45))
        .unwrap();
    calendar.add(event);
    assert_eq!(calendar.len(), 6);
    assert!(calendar.remove(&key));
    assert_eq!(calendar.len(), 5);
    assert!(!calendar.remove(&key));
}

#[test]
fn rejected_drafts_never_reach_the_calendar() {
    let rules = Rules::default();
    let key = test_key(1, TimeSlot::Morning, Location::Hll114);

    let err = rules
        .check_event(&clock(), test_draft(key, Department::Cs, 121))
        .unwrap_err();
    assert!(matches!(err, Rejection::InvalidDuration { min: 30, max: 120 }));

    let mut draft = test_draft(key, Department::Cs, 60);
    draft.key.start = None;
    let err = rules.check_event(&clock(), draft).unwrap_err();
    assert_eq!(err, Rejection::InvalidTimeSlot);
}
