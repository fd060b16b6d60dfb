/// Leading character of a header label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Collapsed,
    Expanded,
}

impl Glyph {
    pub const fn for_state(expanded: bool) -> Self {
        if expanded {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }

    pub const fn as_char(&self) -> char {
        match self {
            Self::Collapsed => '▸',
            Self::Expanded => '▾',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '▸' => Some(Self::Collapsed),
            '▾' => Some(Self::Expanded),
            _ => None,
        }
    }

    /// The glyph a label currently starts with, if any.
    pub fn of_label(label: &str) -> Option<Self> {
        label.chars().next().and_then(Self::from_char)
    }

    /// `label` with this glyph and a space in front, as written at install.
    pub fn prefix(&self, label: &str) -> String {
        format!("{} {label}", self.as_char())
    }
}

/// Swap the first character of `label` for `glyph`, keeping the rest.
pub fn replace_glyph(label: &str, glyph: Glyph) -> String {
    let mut chars = label.chars();
    chars.next();
    let mut result = String::with_capacity(label.len());
    result.push(glyph.as_char());
    result.push_str(chars.as_str());
    result
}
