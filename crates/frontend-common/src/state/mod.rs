//! Reducer-backed view state

pub mod task_list;

pub use task_list::{TaskListAction, TaskListHandle, TaskListState};
