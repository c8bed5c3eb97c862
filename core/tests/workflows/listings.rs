// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar listings across campuses, departments and dates.

use eventorg_core::{Calendar, Campus, Department, Listing, Location, TimeSlot};

use crate::common::{test_event, test_key};

fn campus_calendar() -> Calendar {
    let mut calendar = Calendar::new();
    let rooms = [
        (Location::Til232, Department::Math),
        (Location::Mu302, Department::Cs),
        (Location::Arc103, Department::Ee),
        (Location::BeAud, Department::Bait),
        (Location::Hll114, Department::Iti),
        (Location::Ab2225, Department::Cs),
    ];
    for (day, (location, department)) in (1..).zip(rooms) {
        calendar.add(test_event(test_key(day, TimeSlot::Morning, location), department));
    }
    calendar
}

fn render(calendar: &mut Calendar, listing: Listing) -> Vec<String> {
    let mut out = Vec::new();
    calendar.list(listing, &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn by_campus_lists_busch_then_college_avenue_then_livingston() {
    let mut calendar = campus_calendar();
    let lines = render(&mut calendar, Listing::ByCampus);

    assert_eq!(lines.first().unwrap(), "* Event calendar by campus and building *");
    assert_eq!(lines.last().unwrap(), "* end of event calendar *");

    let campuses: Vec<Campus> = calendar.iter().map(|e| e.location().campus()).collect();
    assert_eq!(
        campuses,
        vec![
            Campus::Busch,
            Campus::Busch,
            Campus::CollegeAvenue,
            Campus::CollegeAvenue,
            Campus::Livingston,
            Campus::Livingston,
        ]
    );
    let locations: Vec<Location> = calendar.iter().map(|e| e.location()).collect();
    assert_eq!(locations, Location::ALL);
    assert!(lines[1].contains("@ARC103 (Allison Road Classroom, Busch)"));
    assert!(lines[6].contains("@TIL232 (Tillett Hall, Livingston)"));
}

#[test]
fn by_department_keeps_insertion_order_among_equals() {
    let mut calendar = campus_calendar();
    calendar.sort(Listing::ByDepartment);

    let order: Vec<(Department, Location)> = calendar
        .iter()
        .map(|e| (e.department(), e.location()))
        .collect();
    assert_eq!(
        order,
        vec![
            (Department::Bait, Location::BeAud),
            (Department::Cs, Location::Mu302),
            (Department::Cs, Location::Ab2225),
            (Department::Ee, Location::Arc103),
            (Department::Iti, Location::Hll114),
            (Department::Math, Location::Til232),
        ]
    );
}

#[test]
fn stored_listing_reflects_last_sort() {
    let mut calendar = campus_calendar();
    let by_date = render(&mut calendar, Listing::ByDate);
    let by_campus = render(&mut calendar, Listing::ByCampus);
    let stored = render(&mut calendar, Listing::Stored);

    assert_eq!(stored[0], "* Event calendar *");
    assert_eq!(stored[1..], by_campus[1..]);
    assert_ne!(stored[1..], by_date[1..]);
}

#[test]
fn every_sorted_listing_is_idempotent() {
    for listing in [Listing::ByDate, Listing::ByCampus, Listing::ByDepartment] {
        let mut calendar = campus_calendar();
        let first = render(&mut calendar, listing);
        let second = render(&mut calendar, listing);
        assert_eq!(first, second, "{listing:?}");
    }
}
