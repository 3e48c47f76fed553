//! Pure ordering algorithms over column task sequences.
//!
//! Nothing here touches storage; the persistence layer loads the sequences,
//! applies one of these functions and writes the result back.

pub mod sequence;
pub mod task_move;
