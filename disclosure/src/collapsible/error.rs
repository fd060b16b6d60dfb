//! Errors raised while installing or driving collapsible sections.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollapsibleError {
    /// A header has no next sibling to show or hide.
    #[error("Collapsible header '{header}' has no content sibling")]
    MissingContent { header: String },

    /// Two marked headers share an id, so only the first can be addressed.
    #[error("Collapsible header id '{id}' is used more than once")]
    DuplicateId { id: String },

    /// A toggle referred to a binding the controller does not have.
    #[error("No collapsible section at index {index}")]
    UnknownBinding { index: usize },

    /// A bound element was removed from the document after install.
    #[error("Element '{id}' is no longer in the document")]
    Detached { id: String },
}

impl CollapsibleError {
    pub fn missing_content(header: impl Into<String>) -> Self {
        Self::MissingContent {
            header: header.into(),
        }
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    pub fn detached(id: impl Into<String>) -> Self {
        Self::Detached { id: id.into() }
    }
}
