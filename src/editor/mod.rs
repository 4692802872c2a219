pub mod compose;

pub use compose::{composite_text, ComposeError, TextStyle};
