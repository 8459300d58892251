pub mod pointer;
pub mod scroll;

pub use pointer::{wire_input_handlers, InputWiring};
pub use scroll::{wire_hint_click, wire_pressure_sources, wire_scroll_reset_on_unload};
