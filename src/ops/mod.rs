pub mod commands;
pub mod status;
pub mod task_list;
pub mod view;
