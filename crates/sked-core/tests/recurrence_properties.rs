//! Property tests for the next-date engine.

use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;
use sked_core::date::{format_date, last_day_of_month, parse_date};
use sked_core::recurrence::{next_date, RecurrenceRule};

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    // 1990-01-01 plus up to ~60 years.
    (0u64..22_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1990, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

fn list<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn month_day_strategy() -> impl Strategy<Value = i32> {
    prop_oneof![Just(-1), Just(-2), 1i32..=28]
}

proptest! {
    #[test]
    fn daily_result_is_on_or_after_now_and_on_the_interval(
        now in date_strategy(),
        start in date_strategy(),
        interval in 1u32..=400,
    ) {
        let rule = format!("d {}", interval);
        let next = parse_date(&next_date(now, &format_date(start), &rule).unwrap()).unwrap();

        prop_assert!(next >= now);
        prop_assert!(next > start);
        let elapsed = (next - start).num_days();
        prop_assert_eq!(elapsed % i64::from(interval), 0);
        // No earlier step would have been enough.
        let previous = next - chrono::Duration::days(i64::from(interval));
        prop_assert!(previous == start || previous < now);
    }

    #[test]
    fn weekly_result_is_a_selected_weekday_after_now(
        now in date_strategy(),
        start in date_strategy(),
        weekdays in proptest::collection::btree_set(1u32..=7, 1..=7),
    ) {
        let days: Vec<u32> = weekdays.iter().copied().collect();
        let rule = format!("w {}", list(&days));
        let next = parse_date(&next_date(now, &format_date(start), &rule).unwrap()).unwrap();

        prop_assert!(next > now);
        prop_assert!(next >= start);
        prop_assert!(weekdays.contains(&next.weekday().number_from_monday()));
        prop_assert!((next - now.max(start)).num_days() <= 7);
    }

    #[test]
    fn monthly_result_matches_a_selector_after_now(
        now in date_strategy(),
        start in date_strategy(),
        days in proptest::collection::btree_set(month_day_strategy(), 1..=4),
        months in proptest::collection::btree_set(1u32..=12, 0..=3),
    ) {
        let day_list: Vec<i32> = days.iter().copied().collect();
        let month_list: Vec<u32> = months.iter().copied().collect();
        let rule = if month_list.is_empty() {
            format!("m {}", list(&day_list))
        } else {
            format!("m {} {}", list(&day_list), list(&month_list))
        };

        let next = parse_date(&next_date(now, &format_date(start), &rule).unwrap()).unwrap();

        prop_assert!(next > now);
        prop_assert!(next >= start);
        prop_assert!(months.is_empty() || months.contains(&next.month()));

        let last = last_day_of_month(next) as i32;
        let day = next.day() as i32;
        let selected = days.contains(&day)
            || (day == last && days.contains(&-1))
            || (day == last - 1 && days.contains(&-2));
        prop_assert!(selected);
    }

    #[test]
    fn yearly_result_keeps_month_and_day_or_rolls_leap_day(
        now in date_strategy(),
        start in date_strategy(),
    ) {
        let next = parse_date(&next_date(now, &format_date(start), "y").unwrap()).unwrap();

        prop_assert!(next >= now);
        prop_assert!(next > start);
        if start.month() == 2 && start.day() == 29 {
            prop_assert!(
                (next.month(), next.day()) == (2, 29) || (next.month(), next.day()) == (3, 1)
            );
        } else {
            prop_assert_eq!((next.month(), next.day()), (start.month(), start.day()));
        }
    }

    #[test]
    fn engine_is_deterministic(
        now in date_strategy(),
        start in date_strategy(),
        rule in prop_oneof![
            (1u32..=400).prop_map(|n| format!("d {}", n)),
            Just("y".to_string()),
            Just("w 1,5".to_string()),
            Just("m 15,-1 2,8".to_string()),
        ],
    ) {
        let start = format_date(start);
        prop_assert_eq!(next_date(now, &start, &rule), next_date(now, &start, &rule));
    }

    #[test]
    fn canonical_rule_text_round_trips(
        days in proptest::collection::btree_set(month_day_strategy(), 1..=5),
    ) {
        let day_list: Vec<i32> = days.iter().copied().collect();
        let rule: RecurrenceRule = format!("M {}", list(&day_list)).parse().unwrap();
        prop_assert_eq!(rule.to_string().parse::<RecurrenceRule>().unwrap(), rule);
    }
}
