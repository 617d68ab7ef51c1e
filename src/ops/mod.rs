pub mod editor;
pub mod project_ops;
pub mod task_ops;
pub mod transfer;
