use super::Style;
use crate::element::Element;

/// Class-based default styles supplied by the host page.
///
/// Rules apply in insertion order, so a later rule overrides an earlier one
/// for the properties it sets.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    rules: Vec<(String, Style)>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, class: impl Into<String>, style: Style) -> Self {
        self.rules.push((class.into(), style));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The style the sheet assigns to `element`, ignoring its inline style.
    pub fn style_for(&self, element: &Element) -> Style {
        self.rules
            .iter()
            .filter(|(class, _)| element.has_class(class))
            .fold(Style::default(), |acc, (_, style)| acc.merge(*style))
    }
}
