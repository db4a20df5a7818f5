// Linkstack state managers
// Managers own the bookmark array, its rendered view, submissions and edits.

pub mod bookmark_store;
pub mod edit_dialog;
pub mod list_renderer;
pub mod submission_handler;
