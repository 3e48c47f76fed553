use crate::PlacedTask;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub total_tasks: usize,
    pub completed_tasks: usize,
}

impl ProjectStats {
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a PlacedTask>) -> Self {
        tasks.into_iter().fold(Self::default(), |mut stats, t| {
            stats.total_tasks += 1;
            if t.status().is_completed() {
                stats.completed_tasks += 1;
            }
            stats
        })
    }
}
