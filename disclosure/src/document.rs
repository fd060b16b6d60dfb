//! A tree of elements plus the stylesheet that gives them their default look.

use crate::element::{collect_by_class, element_at, find_element, find_element_mut, find_path, Element};
use crate::types::{Display, Style, Stylesheet};

#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
    stylesheet: Stylesheet,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            stylesheet: Stylesheet::default(),
        }
    }

    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// IDs of every element carrying `class`, in document order.
    pub fn elements_by_class(&self, class: &str) -> Vec<String> {
        collect_by_class(&self.root, class)
    }

    /// ID of the parent of `id`. None for the root or unknown IDs.
    pub fn parent(&self, id: &str) -> Option<String> {
        let mut path = find_path(&self.root, id)?;
        path.pop()?;
        element_at(&self.root, &path).map(|el| el.id.clone())
    }

    /// ID of the element immediately following `id` under the same parent.
    pub fn next_element_sibling(&self, id: &str) -> Option<String> {
        let mut path = find_path(&self.root, id)?;
        let last = path.last_mut()?;
        *last += 1;
        element_at(&self.root, &path).map(|el| el.id.clone())
    }

    /// `id` followed by each of its ancestors up to the root.
    pub fn ancestors(&self, id: &str) -> Vec<String> {
        let Some(path) = find_path(&self.root, id) else {
            return Vec::new();
        };

        (0..=path.len())
            .rev()
            .filter_map(|depth| element_at(&self.root, &path[..depth]))
            .map(|el| el.id.clone())
            .collect()
    }

    /// Stylesheet rules with the element's inline style layered on top.
    pub fn computed_style(&self, id: &str) -> Option<Style> {
        let element = self.get(id)?;
        Some(self.stylesheet.style_for(element).merge(element.style))
    }

    /// Effective `display` of an element. Unstyled elements are `block`.
    pub fn computed_display(&self, id: &str) -> Option<Display> {
        self.computed_style(id)
            .map(|style| style.display.unwrap_or_default())
    }

    /// Whether the element and all of its ancestors are displayed.
    pub fn is_rendered(&self, id: &str) -> bool {
        let chain = self.ancestors(id);
        !chain.is_empty()
            && chain.iter().all(|ancestor| {
                self.computed_display(ancestor)
                    .is_some_and(|display| display.is_visible())
            })
    }
}
