mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.content
        .children()
        .iter()
        .find_map(|child| find_element(child, id))
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Child-index path from `root` to the element with `id`.
/// An empty path means `root` itself.
pub fn find_path(root: &Element, id: &str) -> Option<Vec<usize>> {
    if root.id == id {
        return Some(Vec::new());
    }

    for (index, child) in root.content.children().iter().enumerate() {
        if let Some(mut path) = find_path(child, id) {
            path.insert(0, index);
            return Some(path);
        }
    }

    None
}

/// Resolve a child-index path produced by [`find_path`].
pub fn element_at<'a>(root: &'a Element, path: &[usize]) -> Option<&'a Element> {
    path.iter()
        .try_fold(root, |element, &index| element.content.children().get(index))
}

/// IDs of all elements carrying `class`, in document (pre-)order.
pub fn collect_by_class(root: &Element, class: &str) -> Vec<String> {
    let mut result = Vec::new();
    collect_recursive(root, class, &mut result);
    result
}

fn collect_recursive(element: &Element, class: &str, result: &mut Vec<String>) {
    if element.has_class(class) {
        result.push(element.id.clone());
    }

    for child in element.content.children() {
        collect_recursive(child, class, result);
    }
}
