pub mod initialize;
pub mod update_params;

pub use initialize::*;
pub use update_params::*;
