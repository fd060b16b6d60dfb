use std::collections::HashSet;

use log::{debug, info, warn};

use super::{
    replace_glyph, CollapsibleError, ControllerConfig, Glyph, MissingContentPolicy, StateSource,
};
use crate::document::Document;
use crate::event::{Event, MouseButton};
use crate::types::Display;

/// Data key set on a header once a controller has taken it over.
pub const INSTALLED_KEY: &str = "collapsible-installed";

/// A header and the content region it shows or hides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub header: String,
    pub content: String,
    pub expanded: bool,
}

/// Which way a toggle went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Expand,
    Collapse,
}

impl Branch {
    pub const fn glyph(&self) -> Glyph {
        match self {
            Self::Expand => Glyph::Expanded,
            Self::Collapse => Glyph::Collapsed,
        }
    }

    pub const fn display(&self) -> Display {
        match self {
            Self::Expand => Display::Block,
            Self::Collapse => Display::None,
        }
    }
}

/// Owns the header/content bindings of a document and applies clicks to them.
///
/// Bindings are resolved once, at install, in document order. Each toggle
/// works on one binding by index and touches only that header and its
/// content region.
#[derive(Debug, Clone)]
pub struct CollapsibleController {
    config: ControllerConfig,
    bindings: Vec<Binding>,
}

impl CollapsibleController {
    /// Install with the default configuration.
    pub fn install(document: &mut Document) -> Result<Self, CollapsibleError> {
        Self::install_with(document, ControllerConfig::default())
    }

    /// Prefix every marked header with the collapsed glyph and make it clickable.
    ///
    /// Headers already claimed by an earlier install are skipped, so a label
    /// never carries more than one glyph. A header whose id repeats an earlier
    /// header's is treated like one without content. Headers are resolved
    /// before anything is written: when the missing-content policy is `Fail`,
    /// an error leaves the document untouched.
    pub fn install_with(
        document: &mut Document,
        config: ControllerConfig,
    ) -> Result<Self, CollapsibleError> {
        let mut bindings = Vec::new();
        let mut seen = HashSet::new();

        for header in document.elements_by_class(&config.class) {
            if !seen.insert(header.clone()) {
                // Lookups by id only ever reach the first element with it
                match config.missing_content {
                    MissingContentPolicy::Warn => {
                        warn!("Collapsible header id '{header}' is used more than once, leaving the repeat inert");
                    }
                    MissingContentPolicy::Skip => {
                        debug!("Collapsible header id '{header}' is used more than once, skipping the repeat");
                    }
                    MissingContentPolicy::Fail => {
                        return Err(CollapsibleError::duplicate_id(header));
                    }
                }
                continue;
            }

            let already_installed = document
                .get(&header)
                .is_some_and(|el| el.get_data(INSTALLED_KEY).is_some());
            if already_installed {
                debug!("Collapsible header '{header}' already installed, skipping");
                continue;
            }

            let Some(content) = document.next_element_sibling(&header) else {
                match config.missing_content {
                    MissingContentPolicy::Warn => {
                        warn!("Collapsible header '{header}' has no content sibling, leaving it inert");
                    }
                    MissingContentPolicy::Skip => {
                        debug!("Collapsible header '{header}' has no content sibling, skipping");
                    }
                    MissingContentPolicy::Fail => {
                        return Err(CollapsibleError::missing_content(header));
                    }
                }
                continue;
            };

            bindings.push(Binding {
                header,
                content,
                expanded: false,
            });
        }

        for binding in &bindings {
            let Some(header) = document.get_mut(&binding.header) else {
                continue;
            };
            if header.get_data(INSTALLED_KEY).is_some() {
                continue;
            }
            let label = header.text_content();
            header.set_text_content(Glyph::Collapsed.prefix(&label));
            header.clickable = true;
            header
                .data
                .insert(INSTALLED_KEY.to_string(), "true".to_string());
            debug!(
                "Bound collapsible header '{}' to content '{}'",
                binding.header, binding.content
            );
        }

        info!(
            "Installed {} collapsible section(s) for class '{}'",
            bindings.len(),
            config.class
        );

        Ok(Self { config, bindings })
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Index of the binding whose header is `header`.
    pub fn position(&self, header: &str) -> Option<usize> {
        self.bindings.iter().position(|b| b.header == header)
    }

    pub fn is_expanded(&self, index: usize) -> Option<bool> {
        self.bindings.get(index).map(|b| b.expanded)
    }

    /// Apply one click to the section at `index`.
    ///
    /// Toggles the active class on the header, then either collapses
    /// (glyph `▸`, display `none`) or expands (glyph `▾`, display `block`).
    /// Which branch runs depends on the configured [`StateSource`].
    pub fn toggle(
        &mut self,
        document: &mut Document,
        index: usize,
    ) -> Result<Branch, CollapsibleError> {
        let binding = self
            .bindings
            .get_mut(index)
            .ok_or(CollapsibleError::UnknownBinding { index })?;

        let content_display = document
            .get(&binding.content)
            .ok_or_else(|| CollapsibleError::detached(&binding.content))?
            .style
            .display;

        let open = match self.config.state_source {
            StateSource::Logical => binding.expanded,
            StateSource::InlineStyle => content_display == Some(Display::Block),
        };
        let branch = if open {
            Branch::Collapse
        } else {
            Branch::Expand
        };

        let header = document
            .get_mut(&binding.header)
            .ok_or_else(|| CollapsibleError::detached(&binding.header))?;
        header.toggle_class(&self.config.active_class);
        let label = replace_glyph(&header.text_content(), branch.glyph());
        header.set_text_content(label);

        if let Some(content) = document.get_mut(&binding.content) {
            content.style.display = Some(branch.display());
        }
        binding.expanded = branch == Branch::Expand;

        debug!(
            "Collapsible '{}' {:?}, content '{}' display {}",
            binding.header,
            branch,
            binding.content,
            branch.display()
        );

        Ok(branch)
    }

    /// Route an event to the section it belongs to.
    ///
    /// A left click on a header, or on anything inside one, toggles the
    /// nearest enclosing header. Every other event is ignored.
    pub fn handle_event(
        &mut self,
        document: &mut Document,
        event: &Event,
    ) -> Result<Option<Branch>, CollapsibleError> {
        let Event::Click {
            target: Some(target),
            button: MouseButton::Left,
            ..
        } = event
        else {
            return Ok(None);
        };

        let index = document
            .ancestors(target)
            .iter()
            .find_map(|id| self.position(id));

        match index {
            Some(index) => self.toggle(document, index).map(Some),
            None => Ok(None),
        }
    }
}
