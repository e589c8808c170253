mod create_task_form;
mod edit_modal;
mod error_banner;
mod input;
mod spinner;
mod task_item;
mod task_list;

pub use create_task_form::CreateTaskForm;
pub use edit_modal::EditModal;
pub use error_banner::ErrorBanner;
pub use input::{bind_input, bind_textarea};
pub use spinner::LoadingSpinner as Spinner;
pub use task_item::{TaskItem, TaskItemProps};
pub use task_list::TaskList;
