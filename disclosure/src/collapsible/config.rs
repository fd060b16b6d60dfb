//! Controller configuration types.

/// How the click handler decides whether a section is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateSource {
    /// Use the binding's `expanded` flag and drive the display style from it.
    #[default]
    Logical,
    /// Treat the section as open exactly when the content's inline display is
    /// `block`. Content shown only by the stylesheet therefore reads as closed,
    /// and its first click expands it.
    InlineStyle,
}

/// What install does with a header it cannot bind: one with no following
/// sibling, or one whose id repeats an earlier header's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingContentPolicy {
    /// Leave the header untouched and log a warning.
    #[default]
    Warn,
    /// Leave the header untouched without a warning.
    Skip,
    /// Abort the install with [`CollapsibleError::MissingContent`](super::CollapsibleError)
    /// or `DuplicateId`.
    Fail,
}

/// Controller configuration.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Class that marks an element as a collapsible header.
    pub class: String,

    /// Class toggled on a header each time it is clicked. Cosmetic only.
    pub active_class: String,

    pub state_source: StateSource,

    pub missing_content: MissingContentPolicy,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            class: "collapsible".to_string(),
            active_class: "active".to_string(),
            state_source: StateSource::default(),
            missing_content: MissingContentPolicy::default(),
        }
    }
}

impl ControllerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker class headers are found by.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Set the class toggled on click.
    pub fn active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    pub fn state_source(mut self, source: StateSource) -> Self {
        self.state_source = source;
        self
    }

    pub fn missing_content(mut self, policy: MissingContentPolicy) -> Self {
        self.missing_content = policy;
        self
    }
}
