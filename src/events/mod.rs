pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_answer_keys;
pub use pointer::{wire_canvas_resize, wire_option_clicks, wire_pointer_tracking};
