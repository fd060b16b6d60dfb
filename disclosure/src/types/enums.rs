use std::fmt;

/// Value of the `display` style property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    Inline,
    Flex,
    None,
}

impl Display {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Inline => "inline",
            Self::Flex => "flex",
            Self::None => "none",
        }
    }

    /// Whether an element with this display value takes part in rendering.
    pub const fn is_visible(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
