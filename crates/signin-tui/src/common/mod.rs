pub mod layout;
pub mod task;

pub use layout::{centered_rect, render_container};
pub use task::{TaskCompleted, TaskId, TaskSeq, TaskState};
