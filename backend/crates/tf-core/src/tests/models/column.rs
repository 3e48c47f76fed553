use crate::{Column, DEFAULT_COLUMN_TITLES, TaskStatus};

use uuid::Uuid;

#[test]
fn test_default_set_has_three_columns_in_order() {
    let board_id = Uuid::new_v4();

    let columns = Column::default_set(board_id);

    let titles: Vec<&str> = columns.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, DEFAULT_COLUMN_TITLES.to_vec());
    assert_eq!(
        columns.iter().map(|c| c.position).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
    assert!(columns.iter().all(|c| c.board_id == board_id));
    assert!(columns.iter().all(|c| c.version == 1));
}

#[test]
fn test_default_set_covers_every_status() {
    let columns = Column::default_set(Uuid::new_v4());

    for status in [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ] {
        let column = status.resolve_column(&columns).unwrap();
        assert_eq!(TaskStatus::from_column_title(&column.title), status);
    }
}
