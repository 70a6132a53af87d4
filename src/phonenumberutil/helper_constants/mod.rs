mod helper_constants;

pub use helper_constants::*;
