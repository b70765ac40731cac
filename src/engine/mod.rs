mod input_surface;
pub use input_surface::*;

mod stamp;
pub use stamp::*;
