use crate::{PlacedTask, ProjectStats, Task};

use uuid::Uuid;

fn placed(column_title: &str) -> PlacedTask {
    PlacedTask {
        task: Task::new(Uuid::new_v4(), Uuid::new_v4(), "t".to_string()),
        column_title: column_title.to_string(),
    }
}

#[test]
fn test_stats_count_completed_by_column_title() {
    let tasks = vec![placed("To Do"), placed("Done"), placed("done!"), placed("Doing")];

    let stats = ProjectStats::from_tasks(&tasks);

    assert_eq!(stats.total_tasks, 4);
    assert_eq!(stats.completed_tasks, 2);
}

#[test]
fn test_stats_empty() {
    let none: Vec<PlacedTask> = Vec::new();

    assert_eq!(ProjectStats::from_tasks(&none), ProjectStats::default());
}
