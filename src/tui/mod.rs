pub mod ansi;
pub mod footer;
pub mod header;
pub mod list_view;
pub mod log_view;
pub mod render;
pub mod spinner;
pub mod status_bar;
