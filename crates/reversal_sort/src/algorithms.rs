pub mod best_first;
pub mod bottom_up;
pub mod common;
pub mod top_down_memo;
