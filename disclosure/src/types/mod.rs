mod enums;
mod style;
mod stylesheet;

pub use enums::Display;
pub use style::Style;
pub use stylesheet::Stylesheet;
