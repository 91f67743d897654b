//! Walks a list of file paths; unreadable paths pause the flow so the
//! operator can continue, skip, or stop.
//!
//! Run with `cargo run --example file_processing`.

use std::fs;
use std::path::PathBuf;

use flowstep::{Flow, FlowOptions, Source};

fn main() {
    flowstep::logging::init_default_logging().expect("initialize logging");

    let filenames: Vec<PathBuf> = [
        "file1.txt",
        "file2.txt",
        "file3.txt",
        "file4.txt",
        "file5.txt",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();

    let options = FlowOptions::new().with_verbose(true);
    let mut flow = Flow::new(Source::reiterable(filenames), options);
    let controller = flow.controller();

    for (index, filename) in flow.by_ref() {
        println!("Processing file: {} (item {index})", filename.display());
        if let Err(err) = fs::read_to_string(&filename) {
            controller.pause(Some(&format!(
                "Filename {} is paused. Error: {err}",
                filename.display()
            )));
        }
    }
}
