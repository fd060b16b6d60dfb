//! Click-to-toggle disclosure sections.
//!
//! Every element carrying the marker class (`collapsible` by default) becomes a
//! header: its label gets a leading glyph and a click on it shows or hides the
//! element that immediately follows it.
//!
//! # Example
//!
//! ```
//! use disclosure::{CollapsibleController, Display, Document, Element, Event};
//!
//! let mut doc = Document::new(
//!     Element::box_()
//!         .child(Element::text("Details").id("details").class("collapsible"))
//!         .child(Element::text("Hidden body").id("body")),
//! );
//!
//! let mut controller = CollapsibleController::install(&mut doc).unwrap();
//! assert_eq!(doc.get("details").unwrap().text_content(), "▸ Details");
//!
//! controller.handle_event(&mut doc, &Event::click("details")).unwrap();
//! assert_eq!(doc.get("details").unwrap().text_content(), "▾ Details");
//! assert_eq!(doc.get("body").unwrap().style.display, Some(Display::Block));
//! ```

mod config;
mod controller;
mod error;
mod glyph;

pub use config::{ControllerConfig, MissingContentPolicy, StateSource};
pub use controller::{Binding, Branch, CollapsibleController, INSTALLED_KEY};
pub use error::CollapsibleError;
pub use glyph::{replace_glyph, Glyph};
