//! Property checks for the ordering algorithms.

use crate::{move_across, reorder_within};

use proptest::prelude::*;
use uuid::Uuid;

fn sequence(len: usize) -> Vec<Uuid> {
    (0..len).map(|_| Uuid::new_v4()).collect()
}

proptest! {
    #[test]
    fn reorder_keeps_every_task_exactly_once(len in 1usize..20, pick in 0usize..20, dest in 0usize..40) {
        let original = sequence(len);
        let task = original[pick % len];
        let mut seq = original.clone();

        reorder_within(&mut seq, task, Uuid::new_v4(), dest).unwrap();

        prop_assert_eq!(seq.len(), original.len());
        prop_assert_eq!(seq.iter().filter(|id| **id == task).count(), 1);
        prop_assert_eq!(seq.iter().position(|id| *id == task), Some(dest.min(len - 1)));
    }

    #[test]
    fn reorder_preserves_relative_order_of_others(len in 1usize..20, pick in 0usize..20, dest in 0usize..40) {
        let original = sequence(len);
        let task = original[pick % len];
        let mut seq = original.clone();

        reorder_within(&mut seq, task, Uuid::new_v4(), dest).unwrap();

        let before: Vec<Uuid> = original.iter().copied().filter(|id| *id != task).collect();
        let after: Vec<Uuid> = seq.iter().copied().filter(|id| *id != task).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn move_across_places_task_only_in_destination(
        src_len in 1usize..15,
        dst_len in 0usize..15,
        pick in 0usize..15,
        dest in 0usize..30,
    ) {
        let original_src = sequence(src_len);
        let original_dst = sequence(dst_len);
        let task = original_src[pick % src_len];
        let mut src = original_src.clone();
        let mut dst = original_dst.clone();

        move_across(&mut src, &mut dst, task, Uuid::new_v4(), dest).unwrap();

        prop_assert!(!src.contains(&task));
        prop_assert_eq!(dst.iter().filter(|id| **id == task).count(), 1);
        prop_assert_eq!(dst.iter().position(|id| *id == task), Some(dest.min(dst_len)));
        prop_assert_eq!(src.len() + dst.len(), src_len + dst_len);

        let others_src: Vec<Uuid> = original_src.iter().copied().filter(|id| *id != task).collect();
        prop_assert_eq!(src, others_src);
        let others_dst: Vec<Uuid> = dst.iter().copied().filter(|id| *id != task).collect();
        prop_assert_eq!(others_dst, original_dst);
    }
}
