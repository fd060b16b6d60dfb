use std::fs::File;

use disclosure::{
    translate_events, CollapsibleController, Document, Element, Event, Key, Style, Stylesheet,
    Terminal,
};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("collapsible.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let mut doc = page();
    let mut controller = CollapsibleController::install(&mut doc)?;
    let mut term = Terminal::new()?;

    loop {
        term.render(&doc)?;

        let raw_events = term.poll(None)?;
        let events = translate_events(&raw_events, doc.root(), term.layout());

        for event in events {
            match &event {
                Event::Key {
                    key: Key::Char('q') | Key::Escape,
                    ..
                } => return Ok(()),
                Event::Click { .. } => {
                    if let Some(branch) = controller.handle_event(&mut doc, &event)? {
                        log::info!("Click -> {branch:?}");
                    }
                }
                _ => {}
            }
        }
    }
}

fn page() -> Document {
    let sections = [
        ("Installation", "Add the crate to Cargo.toml and rebuild."),
        ("Usage", "Mark headers with the `collapsible` class."),
        ("Orphan header", ""),
    ];

    let mut root = Element::box_()
        .child(Element::text("Click a header to toggle it. Press 'q' to quit."))
        .child(Element::text(""));

    for (title, body) in sections {
        root = root.child(Element::text(title).class("collapsible"));
        if !body.is_empty() {
            root = root.child(
                Element::box_()
                    .class("content")
                    .child(Element::text(body)),
            );
        }
    }

    Document::new(root).with_stylesheet(Stylesheet::new().rule("content", Style::hidden()))
}
