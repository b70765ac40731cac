pub const POSITIONS_ATTRIBUTE: &str = "positions";

mod attributes;
pub use attributes::*;

mod definition;
pub use definition::*;

mod markup;
pub use markup::*;

pub mod host;
