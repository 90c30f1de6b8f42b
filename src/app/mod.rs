pub mod file_ops;
pub mod state;
pub mod view_model;
pub mod zoom;

pub use state::*;
pub use view_model::*;
pub use zoom::fit_size;
