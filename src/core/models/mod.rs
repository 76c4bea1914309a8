pub mod board;
pub mod column;
pub mod id;
pub mod task;

pub use board::{Board, Labels};
pub use column::Column;
pub use id::Id;
pub use task::Task;
