mod dialogs;
mod image_view;
mod main;
mod toolbar;
