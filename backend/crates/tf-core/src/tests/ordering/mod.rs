mod property_tests;
mod sequence;
mod task_move;
