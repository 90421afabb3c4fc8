mod path;
mod errors;

pub use path::*;
pub use errors::*;
