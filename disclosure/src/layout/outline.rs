use super::{LayoutResult, Rect};
use crate::document::Document;
use crate::element::{Content, Element};
use crate::text::display_width;

/// Columns each nesting level is shifted right by.
pub const INDENT: u16 = 2;

/// Lay the document out as an outline: one row per text element, nested
/// containers indented by [`INDENT`].
///
/// Elements whose computed display is `none` are left out together with
/// their subtree. Rows that fall below `available` are not placed.
pub fn layout(document: &Document, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let mut row = available.y;
    layout_element(document, document.root(), available.x, &mut row, available, &mut result);
    result
}

fn layout_element(
    document: &Document,
    element: &Element,
    x: u16,
    row: &mut u16,
    available: Rect,
    result: &mut LayoutResult,
) {
    let style = document.stylesheet().style_for(element).merge(element.style);
    let displayed = style.display.unwrap_or_default().is_visible();
    if !displayed || *row >= available.bottom() {
        return;
    }

    let max_width = available.right().saturating_sub(x);
    match &element.content {
        Content::Text(text) => {
            let width = (display_width(text).min(max_width as usize)) as u16;
            result.insert(element.id.clone(), Rect::new(x, *row, width, 1));
            *row += 1;
        }
        Content::None => {
            result.insert(element.id.clone(), Rect::new(x, *row, 0, 0));
        }
        Content::Children(children) => {
            let start = *row;
            // The root's children sit flush with the available area
            let child_x = if element.id == document.root().id {
                x
            } else {
                x.saturating_add(INDENT).min(available.right())
            };
            for child in children {
                layout_element(document, child, child_x, row, available, result);
            }
            result.insert(
                element.id.clone(),
                Rect::new(x, start, max_width, *row - start),
            );
        }
    }
}
