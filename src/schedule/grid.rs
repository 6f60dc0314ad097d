//! Day-grid layout engine: maps schedule intervals onto a fixed 78-row
//! vertical track and produces the axis labels alongside.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::item::{ScheduleError, ScheduleItem, TaskStatus};
use crate::config::ClockFormat;

/// Number of rows the day grid is divided into
pub const TOTAL_ROWS: i64 = 78;

/// Uniform row length in minutes. 1440 minutes over 78 rows does not divide
/// evenly (~18.46 min per row); the grid stays uniform and the fractional
/// length is carried through the math instead of being rounded per-row.
pub const MINUTES_PER_ROW: f64 = 1440.0 / TOTAL_ROWS as f64;

/// Where an item sits on the day grid, both fields 1-based row units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlacement {
    pub row_start: i64,
    pub row_span: i64,
}

/// One entry of the day render set
#[derive(Debug, Clone)]
pub struct PlacedItem<'a> {
    pub item: &'a ScheduleItem,
    pub placement: GridPlacement,
    pub start_label: String,
    pub end_label: String,
    pub status: TaskStatus,
}

/// Axis labels for the day grid: exactly [`TOTAL_ROWS`] strings in `HH:MM`
/// form, starting at `00:00` and strictly increasing. Lazy and restartable.
pub fn time_slots() -> impl Iterator<Item = String> + Clone {
    (0..TOTAL_ROWS).map(|i| {
        let minutes = (i as f64 * MINUTES_PER_ROW) as i64;
        format!("{:02}:{:02}", minutes / 60, minutes % 60)
    })
}

fn day_bounds(day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = day.and_time(NaiveTime::MIN);
    (start, start + Duration::days(1))
}

/// Stable filter: items whose `[start, end)` intersects the given calendar
/// day. Inclusive start, exclusive end, so an item spanning midnight shows
/// up on both days while one ending exactly at midnight stays on the first.
pub fn schedules_for_day(items: &[ScheduleItem], day: NaiveDate) -> Vec<&ScheduleItem> {
    let (day_start, day_end) = day_bounds(day);
    items
        .iter()
        .filter(|item| item.start < day_end && item.end > day_start)
        .collect()
}

/// Signed minutes between the day's midnight and the instant
fn minutes_since_midnight(day: NaiveDate, instant: NaiveDateTime) -> i64 {
    let (day_start, _) = day_bounds(day);
    (instant - day_start).num_minutes()
}

/// 1-based starting row for an item beginning at `start`, relative to the
/// rendered day. Can fall outside `[1, TOTAL_ROWS]` for items that begin
/// on another day; callers clip those.
pub fn grid_row_start(day: NaiveDate, start: NaiveDateTime) -> i64 {
    let minutes = minutes_since_midnight(day, start) as f64;
    (minutes / MINUTES_PER_ROW).floor() as i64 + 1
}

/// Rows the item occupies. Never less than 1, so sub-row items stay visible.
pub fn row_span(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let minutes = (end - start).num_minutes() as f64;
    ((minutes / MINUTES_PER_ROW).round() as i64).max(1)
}

impl GridPlacement {
    /// Placement of an item on the given day's grid, or `None` when the
    /// start row lands outside the track. Clipping, not an error.
    pub fn compute(day: NaiveDate, item: &ScheduleItem) -> Option<Self> {
        let row_start = grid_row_start(day, item.start);
        if !(1..=TOTAL_ROWS).contains(&row_start) {
            return None;
        }
        Some(Self {
            row_start,
            row_span: row_span(item.start, item.end),
        })
    }
}

/// Format an instant's time-of-day for display next to a grid block.
/// Stable: the same instant and format always yield the same string.
pub fn format_time(instant: NaiveDateTime, clock: ClockFormat) -> String {
    match clock {
        ClockFormat::Hour24 => instant.format("%H:%M").to_string(),
        ClockFormat::Hour12 => {
            use chrono::Timelike;
            let (hour, minute) = (instant.hour(), instant.minute());
            let (h12, ampm) = if hour == 0 {
                (12, "am")
            } else if hour < 12 {
                (hour, "am")
            } else if hour == 12 {
                (12, "pm")
            } else {
                (hour - 12, "pm")
            };
            format!("{}:{:02}{}", h12, minute, ampm)
        }
    }
}

/// Full engine pass for one rendered day.
///
/// Validates every item up front (an inverted interval is a data bug, not a
/// layout case), filters to the day, orders deterministically by start time
/// with ties broken by id, and drops placements that fall off the track.
pub fn day_layout(
    items: &[ScheduleItem],
    day: NaiveDate,
    clock: ClockFormat,
) -> Result<Vec<PlacedItem<'_>>, ScheduleError> {
    for item in items {
        item.validate()?;
    }

    let mut on_day = schedules_for_day(items, day);
    // Vec::sort_by is stable; ties on (start, id) cannot occur since ids
    // are unique, so the order is fully deterministic
    on_day.sort_by(|a, b| (a.start, a.id).cmp(&(b.start, b.id)));

    Ok(on_day
        .into_iter()
        .filter_map(|item| {
            let placement = GridPlacement::compute(day, item)?;
            Some(PlacedItem {
                item,
                placement,
                start_label: format_time(item.start, clock),
                end_label: format_time(item.end, clock),
                status: item.status_tag(),
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    fn item(id: i64, start: NaiveDateTime, end: NaiveDateTime) -> ScheduleItem {
        ScheduleItem::new(id, format!("task {}", id), "", start, end, 0).unwrap()
    }

    fn on_day(d: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        d.and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn slot_labels_cover_the_day() {
        let labels: Vec<String> = time_slots().collect();
        assert_eq!(labels.len() as i64, TOTAL_ROWS);
        assert_eq!(labels[0], "00:00");

        // Strictly increasing in wall-clock order
        for pair in labels.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }

        // Restartable: a second pass yields the same sequence
        let again: Vec<String> = time_slots().collect();
        assert_eq!(labels, again);
    }

    #[test]
    fn row_start_matches_worked_example() {
        // 01:00-02:00 with ~18.46 minute rows: floor(60/18.46)+1 = 4
        let start = on_day(day(), 1, 0);
        let end = on_day(day(), 2, 0);
        assert_eq!(grid_row_start(day(), start), 4);
        assert_eq!(row_span(start, end), 3);
    }

    #[test]
    fn row_span_never_below_one() {
        let start = on_day(day(), 9, 0);
        for minutes in [1, 5, 10, 18, 19, 60, 300] {
            let end = start + Duration::minutes(minutes);
            assert!(row_span(start, end) >= 1, "span for {} min", minutes);
        }
    }

    #[test]
    fn row_start_is_monotonic_in_start_time() {
        let mut last = 0;
        for minute in (0..1440).step_by(7) {
            let start = day().and_time(NaiveTime::MIN) + Duration::minutes(minute);
            let row = grid_row_start(day(), start);
            assert!(row >= last);
            last = row;
        }
        assert_eq!(last, TOTAL_ROWS);
    }

    #[test]
    fn overlap_filter_keeps_day_items_in_order() {
        let items = vec![
            item(0, on_day(day(), 9, 0), on_day(day(), 10, 0)),
            item(1, on_day(day() + Duration::days(1), 9, 0), on_day(day() + Duration::days(1), 10, 0)),
            item(2, on_day(day(), 14, 0), on_day(day(), 15, 0)),
        ];
        let kept: Vec<i64> = schedules_for_day(&items, day()).iter().map(|i| i.id).collect();
        assert_eq!(kept, vec![0, 2]);
    }

    #[test]
    fn overlap_filter_is_idempotent() {
        let items = vec![
            item(0, on_day(day(), 9, 0), on_day(day(), 10, 0)),
            item(1, on_day(day(), 23, 0), on_day(day() + Duration::days(1), 1, 0)),
        ];
        let once: Vec<ScheduleItem> = schedules_for_day(&items, day())
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<i64> = schedules_for_day(&once, day()).iter().map(|i| i.id).collect();
        assert_eq!(twice, once.iter().map(|i| i.id).collect::<Vec<_>>());
    }

    #[test]
    fn midnight_spanner_appears_on_both_days() {
        // 23:50 -> next day 00:10
        let items = vec![item(
            7,
            on_day(day(), 23, 50),
            on_day(day() + Duration::days(1), 0, 10),
        )];
        assert_eq!(schedules_for_day(&items, day()).len(), 1);
        assert_eq!(schedules_for_day(&items, day() + Duration::days(1)).len(), 1);
    }

    #[test]
    fn item_ending_at_midnight_stays_on_first_day() {
        let items = vec![item(
            3,
            on_day(day(), 22, 0),
            on_day(day() + Duration::days(1), 0, 0),
        )];
        assert_eq!(schedules_for_day(&items, day()).len(), 1);
        assert!(schedules_for_day(&items, day() + Duration::days(1)).is_empty());
    }

    #[test]
    fn placement_is_clipped_for_foreign_day_starts() {
        // Starts the previous day, so its row on the rendered day is < 1
        let spanning = item(
            1,
            on_day(day() - Duration::days(1), 23, 50),
            on_day(day(), 0, 10),
        );
        assert_eq!(GridPlacement::compute(day(), &spanning), None);

        let in_range = item(2, on_day(day(), 1, 0), on_day(day(), 2, 0));
        assert_eq!(
            GridPlacement::compute(day(), &in_range),
            Some(GridPlacement { row_start: 4, row_span: 3 })
        );
    }

    #[test]
    fn day_layout_empty_input_is_empty_output() {
        let placed = day_layout(&[], day(), ClockFormat::Hour24).unwrap();
        assert!(placed.is_empty());
    }

    #[test]
    fn day_layout_orders_simultaneous_items_by_id() {
        let start = on_day(day(), 9, 0);
        let end = on_day(day(), 10, 0);
        let items = vec![item(5, start, end), item(2, start, end), item(9, start, end)];
        let placed = day_layout(&items, day(), ClockFormat::Hour24).unwrap();
        let ids: Vec<i64> = placed.iter().map(|p| p.item.id).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[test]
    fn day_layout_fails_fast_on_invalid_item() {
        let mut bad = item(1, on_day(day(), 9, 0), on_day(day(), 10, 0));
        bad.end = bad.start;
        let items = [bad];
        let err = day_layout(&items, day(), ClockFormat::Hour24);
        assert!(err.is_err());
    }

    #[test]
    fn day_layout_carries_labels_and_status() {
        let items = vec![
            ScheduleItem::new(1, "quest", "", on_day(day(), 13, 30), on_day(day(), 14, 0), 2)
                .unwrap(),
        ];
        let placed = day_layout(&items, day(), ClockFormat::Hour12).unwrap();
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].start_label, "1:30pm");
        assert_eq!(placed[0].end_label, "2:00pm");
        assert_eq!(placed[0].status, TaskStatus::Quest);
    }

    #[test]
    fn time_formatting_covers_clock_edges() {
        let midnight = on_day(day(), 0, 5);
        let noon = on_day(day(), 12, 5);
        assert_eq!(format_time(midnight, ClockFormat::Hour24), "00:05");
        assert_eq!(format_time(midnight, ClockFormat::Hour12), "12:05am");
        assert_eq!(format_time(noon, ClockFormat::Hour24), "12:05");
        assert_eq!(format_time(noon, ClockFormat::Hour12), "12:05pm");
    }
}
