/// Panels composed by the main window.
pub mod control_panel;
pub mod folder_panel;
pub mod image_list_panel;
pub mod log_panel;
