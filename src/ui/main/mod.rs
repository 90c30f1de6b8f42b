pub mod main_ui;
pub mod statusbar;
