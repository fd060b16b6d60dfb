mod outline;
mod rect;

use std::collections::HashMap;

pub use outline::{layout, INDENT};
pub use rect::Rect;

pub type LayoutResult = HashMap<String, Rect>;
