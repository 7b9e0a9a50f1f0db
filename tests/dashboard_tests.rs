mod common;
use common::{add_user, at, day, mem_db};

use chrono::NaiveTime;
use punchclock::core::dashboard::{compute_dashboard, work_status, working_hours};
use punchclock::core::punch::record_punch;
use punchclock::core::schedule::create_schedule;
use punchclock::models::dashboard::{DaySlots, WorkStatus};
use punchclock::models::entry_type::EntryType;
use punchclock::models::schedule::Schedule;
use uuid::Uuid;

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn full_day_with_lunch_adds_up() {
    let d = day(2025, 6, 2);
    let slots = DaySlots {
        check_in: Some(at(d, 9, 0, 0)),
        lunch_out: Some(at(d, 12, 0, 0)),
        lunch_in: Some(at(d, 13, 0, 0)),
        check_out: Some(at(d, 18, 0, 0)),
    };

    // 180 before lunch + 300 after = 480 against the 8h default
    let hours = working_hours(&slots, None, at(d, 20, 0, 0));
    assert_eq!(hours.worked, 480);
    assert_eq!(hours.expected_total, 480);
    assert_eq!(hours.remaining, 0);
    assert_eq!(work_status(&slots), WorkStatus::Finished);
}

#[test]
fn open_day_counts_up_to_now() {
    let d = day(2025, 6, 2);
    let slots = DaySlots {
        check_in: Some(at(d, 9, 0, 0)),
        ..Default::default()
    };

    let hours = working_hours(&slots, None, at(d, 11, 30, 0));
    assert_eq!(hours.worked, 150);
    assert_eq!(hours.remaining, 330);
    assert_eq!(work_status(&slots), WorkStatus::Working);
}

#[test]
fn lunch_in_progress_freezes_the_morning_segment() {
    let d = day(2025, 6, 2);
    let slots = DaySlots {
        check_in: Some(at(d, 9, 0, 0)),
        lunch_out: Some(at(d, 12, 0, 0)),
        ..Default::default()
    };

    // the afternoon segment does not exist until LUNCH_IN
    let hours = working_hours(&slots, None, at(d, 12, 45, 0));
    assert_eq!(hours.worked, 180);
    assert_eq!(work_status(&slots), WorkStatus::Lunch);
}

#[test]
fn empty_day_is_not_started() {
    let d = day(2025, 6, 2);
    let slots = DaySlots::default();

    let hours = working_hours(&slots, None, at(d, 10, 0, 0));
    assert_eq!(hours.worked, 0);
    assert_eq!(hours.remaining, 480);
    assert_eq!(work_status(&slots), WorkStatus::NotStarted);
}

#[test]
fn schedule_overrides_the_default_expectation() {
    let d = day(2025, 6, 2);
    let schedule = Schedule::new(
        Uuid::new_v4(),
        d,
        hm(8, 0),
        hm(17, 0),
        Some(hm(12, 0)),
        Some(hm(13, 0)),
    );
    assert_eq!(schedule.expected_minutes(), 480);

    let half_day = Schedule::new(Uuid::new_v4(), d, hm(9, 0), hm(13, 0), None, None);
    let slots = DaySlots {
        check_in: Some(at(d, 9, 0, 0)),
        ..Default::default()
    };
    let hours = working_hours(&slots, Some(&half_day), at(d, 10, 0, 0));
    assert_eq!(hours.expected_total, 240);
    assert_eq!(hours.worked, 60);
    assert_eq!(hours.remaining, 180);
}

#[test]
fn sub_minute_time_is_rounded_once_at_the_end() {
    let d = day(2025, 6, 2);
    let slots = DaySlots {
        check_in: Some(at(d, 9, 0, 30)),
        lunch_out: Some(at(d, 12, 0, 0)),
        lunch_in: Some(at(d, 13, 0, 0)),
        check_out: Some(at(d, 18, 0, 15)),
    };

    // 179.5 + 300.25 = 479.75 → rounds to 480, not 179 + 300
    let hours = working_hours(&slots, None, at(d, 20, 0, 0));
    assert_eq!(hours.worked, 480);
}

#[test]
fn remaining_never_goes_negative() {
    let d = day(2025, 6, 2);
    let slots = DaySlots {
        check_in: Some(at(d, 8, 0, 0)),
        check_out: Some(at(d, 19, 0, 0)),
        ..Default::default()
    };

    let hours = working_hours(&slots, None, at(d, 20, 0, 0));
    assert_eq!(hours.worked, 660);
    assert_eq!(hours.remaining, 0);
}

#[test]
fn status_priority_finished_beats_lunch() {
    // an odd-but-possible shape: OUT present while lunch never closed
    let d = day(2025, 6, 2);
    let slots = DaySlots {
        check_in: Some(at(d, 9, 0, 0)),
        lunch_out: Some(at(d, 12, 0, 0)),
        lunch_in: None,
        check_out: Some(at(d, 17, 0, 0)),
    };
    assert_eq!(work_status(&slots), WorkStatus::Finished);
}

#[test]
fn dashboard_snapshot_combines_entries_and_schedule() {
    let mut conn = mem_db();
    let user = add_user(&conn, "alice");
    let d = day(2025, 6, 2);

    create_schedule(
        &conn,
        user,
        d,
        hm(8, 0),
        hm(16, 0),
        Some(hm(12, 0)),
        Some(hm(12, 30)),
    )
    .unwrap();

    record_punch(&mut conn, user, EntryType::In, at(d, 8, 0, 0)).unwrap();
    record_punch(&mut conn, user, EntryType::LunchOut, at(d, 12, 0, 0)).unwrap();

    let snapshot = compute_dashboard(&conn, user, at(d, 12, 15, 0)).unwrap();
    assert_eq!(snapshot.date, d);
    assert_eq!(snapshot.status, WorkStatus::Lunch);
    assert_eq!(snapshot.working_hours.worked, 240);
    assert_eq!(snapshot.working_hours.expected_total, 450);
    assert_eq!(snapshot.working_hours.remaining, 210);
    assert_eq!(snapshot.entries.check_in, Some(at(d, 8, 0, 0)));
    assert_eq!(snapshot.entries.check_out, None);
}
