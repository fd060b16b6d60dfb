pub mod collapsible;
pub mod document;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use collapsible::{
    Binding, Branch, CollapsibleController, CollapsibleError, ControllerConfig, Glyph,
    MissingContentPolicy, StateSource,
};
pub use document::Document;
pub use element::Element;
pub use event::{translate_events, Event, Key, Modifiers, MouseButton};
pub use hit::hit_test;
pub use layout::{LayoutResult, Rect};
pub use render::{render_lines, render_to_string};
pub use terminal::Terminal;
pub use types::*;
