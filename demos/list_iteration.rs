//! Steps a numeric range with a skip band, pausing after every
//! delivered item so the console prompt can steer the run.
//!
//! Run with `cargo run --example list_iteration` and answer the prompt
//! with `c` (continue), `s` (skip the next item), or anything else to
//! stop.

use flowstep::{Flow, FlowOptions, Source};

fn main() {
    flowstep::logging::init_default_logging().expect("initialize logging");

    let options = FlowOptions::new().with_verbose(true);
    let mut flow = Flow::new(Source::reiterable(0..10usize), options)
        .with_skip_condition(|x| *x > 4 && *x < 8);
    let controller = flow.controller();

    for (index, value) in flow.by_ref() {
        println!("item {index}: {value}");
        // Every delivery waits for the operator.
        controller.pause(None);
    }
}
