use super::Display;

/// Style properties that can be set inline on an element or by a stylesheet rule.
///
/// Every property is optional; `None` means "not set here" so that inline
/// values can be layered over stylesheet values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub display: Option<Display>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    pub fn hidden() -> Self {
        Self::new().display(Display::None)
    }

    /// Layer `other` on top of `self`. Properties set in `other` win.
    pub fn merge(self, other: Style) -> Self {
        Self {
            display: other.display.or(self.display),
        }
    }
}
