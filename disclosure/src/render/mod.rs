use crate::document::Document;
use crate::element::{Content, Element};
use crate::layout::{layout, LayoutResult, Rect};
use crate::text::{display_width, truncate_to_width};

/// Render every laid-out text element into `area`, one string per row.
///
/// Rows with nothing on them come back as empty strings. Text is clipped to
/// the width its element was given by the layout.
pub fn render_lines(root: &Element, layout: &LayoutResult, area: Rect) -> Vec<String> {
    let mut lines = vec![String::new(); area.height as usize];
    render_element(root, layout, area, &mut lines);
    lines
}

fn render_element(element: &Element, layout: &LayoutResult, area: Rect, lines: &mut [String]) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            let Some(row) = rect.y.checked_sub(area.y) else {
                return;
            };
            let Some(line) = lines.get_mut(row as usize) else {
                return;
            };
            let column = rect.x.saturating_sub(area.x) as usize;
            let current = display_width(line);
            if current < column {
                line.push_str(&" ".repeat(column - current));
            }
            line.push_str(&truncate_to_width(text, rect.width as usize));
        }
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, area, lines);
            }
        }
    }
}

/// Lay out and render in one step, trimming trailing empty rows.
pub fn render_to_string(document: &Document, area: Rect) -> String {
    let placed = layout(document, area);
    let mut lines = render_lines(document.root(), &placed, area);
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}
