mod drawing_surface;
pub use drawing_surface::*;

mod stamp_canvas;
pub use stamp_canvas::*;

mod draw_block;
pub use draw_block::*;
