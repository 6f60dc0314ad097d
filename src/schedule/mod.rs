mod grid;
mod item;
mod source;

pub use grid::{
    day_layout, format_time, grid_row_start, row_span, schedules_for_day, time_slots,
    GridPlacement, PlacedItem, MINUTES_PER_ROW, TOTAL_ROWS,
};
pub use item::{ScheduleError, ScheduleItem, TaskStatus};
pub use source::{InMemorySource, ScheduleSource};
