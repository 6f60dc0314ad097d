use anyhow::Result;
use chrono::NaiveDate;

use super::grid::schedules_for_day;
use super::item::ScheduleItem;

/// Data provider seam. The layout engine itself never touches the network;
/// whoever drives a render pass hands it a snapshot obtained through this.
pub trait ScheduleSource {
    /// List schedules overlapping the given calendar day
    fn schedules_for_day(&self, day: NaiveDate) -> Result<Vec<ScheduleItem>>;
}

/// Fixed-collection source for tests and offline use
pub struct InMemorySource {
    items: Vec<ScheduleItem>,
}

impl InMemorySource {
    pub fn new(items: Vec<ScheduleItem>) -> Self {
        Self { items }
    }
}

impl ScheduleSource for InMemorySource {
    fn schedules_for_day(&self, day: NaiveDate) -> Result<Vec<ScheduleItem>> {
        Ok(schedules_for_day(&self.items, day)
            .into_iter()
            .cloned()
            .collect())
    }
}
