//! Integration tests for the public flow API.

use flowstep::{Flow, FlowError, FlowOptions, ScriptedChannel, Source};

#[test]
fn delivered_pairs_match_the_source_in_order() {
    let source = vec!["alpha", "beta", "gamma", "delta"];
    let mut flow = Flow::over(source.clone());

    let mut delivered = Vec::new();
    while let Ok(Some(pair)) = flow.try_next() {
        delivered.push(pair);
    }

    let expected: Vec<_> = source.into_iter().enumerate().collect();
    assert_eq!(delivered, expected);
}

#[test]
fn skip_predicate_scenario_from_the_manual() {
    // Source [1,2,3,4] with predicate x == 2: item 2 is consumed but
    // never delivered, indices stay consecutive, and the pull counter
    // still reaches 4.
    let mut flow = Flow::over(vec![1, 2, 3, 4]).with_skip_condition(|x: &i32| *x == 2);

    assert_eq!(flow.try_next().unwrap(), Some((0, 1)));
    assert_eq!(flow.try_next().unwrap(), Some((1, 3)));
    assert_eq!(flow.try_next().unwrap(), Some((2, 4)));
    assert_eq!(flow.try_next().unwrap(), None);
    assert_eq!(flow.counter(), 4);
}

#[test]
fn pause_then_stop_without_consulting_the_channel() {
    // The channel would fail the test if consulted; pause followed by a
    // direct stop must end the flow with two source items left.
    let channel = || -> std::io::Result<String> { panic!("channel must not be consulted") };
    let mut flow = Flow::over(vec![1, 2, 3]).with_channel(channel);

    assert_eq!(flow.try_next().unwrap(), Some((0, 1)));
    flow.pause(None);
    flow.stop(None);
    assert_eq!(flow.try_next().unwrap(), None);
}

#[test]
fn stop_freezes_the_counter_for_good() {
    let mut flow = Flow::over(0..100);
    flow.fast_forward(5);
    flow.stop(None);

    for _ in 0..3 {
        assert_eq!(flow.try_next().unwrap(), None);
    }
    assert_eq!(flow.counter(), 5);
}

#[test]
fn one_skip_consumes_exactly_one_item() {
    let mut flow = Flow::over(vec![1, 2, 3]);
    assert_eq!(flow.try_next().unwrap(), Some((0, 1)));

    flow.skip(None);
    assert_eq!(flow.try_next().unwrap(), Some((1, 3)));
    assert_eq!(flow.try_next().unwrap(), None);
}

#[test]
fn skip_then_continue_while_paused() {
    // While paused, "s" marks a skip without resuming; the following
    // "c" resumes, so the item at the pause point is silently consumed
    // and the one after it is delivered.
    let mut flow = Flow::over(vec![1, 2, 3]).with_channel(ScriptedChannel::new(["s", "c"]));

    assert_eq!(flow.try_next().unwrap(), Some((0, 1)));
    flow.pause(None);
    assert_eq!(flow.try_next().unwrap(), Some((1, 3)));
    assert_eq!(flow.try_next().unwrap(), None);
}

#[test]
fn controller_steers_the_loop_it_is_consumed_from() {
    let mut flow = Flow::over(0..10);
    let controller = flow.controller();

    let mut seen = Vec::new();
    for (index, value) in flow.by_ref() {
        seen.push((index, value));
        if value == 1 {
            controller.skip(None); // drops 2
        }
        if value == 4 {
            controller.stop(None);
        }
    }

    assert_eq!(seen, vec![(0, 0), (1, 1), (2, 3), (3, 4)]);
}

#[test]
fn get_item_at_step_returns_what_sequential_iteration_would() {
    let items = vec!["a", "b", "c", "d", "e"];

    let mut sequential = Flow::over(items.clone());
    let mut pairs = Vec::new();
    while let Ok(Some(pair)) = sequential.try_next() {
        pairs.push(pair);
    }

    for (step, expected) in pairs.iter().enumerate() {
        let mut flow = Flow::over(items.clone());
        assert_eq!(flow.get_item_at_step(step).unwrap(), *expected);
    }
}

#[test]
fn get_item_at_step_leaves_sequential_iteration_unaffected() {
    let mut flow = Flow::over(0..5);
    assert_eq!(flow.try_next().unwrap(), Some((0, 0)));

    assert_eq!(flow.get_item_at_step(4).unwrap(), (4, 4));

    let rest: Vec<_> = flow.by_ref().collect();
    assert_eq!(rest, vec![(1, 1), (2, 2), (3, 3), (4, 4)]);
}

#[test]
fn get_item_at_step_rejects_passed_and_out_of_bound_steps() {
    let mut flow = Flow::over(0..4);
    flow.fast_forward(3);

    assert!(matches!(
        flow.get_item_at_step(1),
        Err(FlowError::OutOfRange { step: 1, .. })
    ));
    assert!(matches!(
        flow.get_item_at_step(4),
        Err(FlowError::OutOfRange { step: 4, .. })
    ));
    // Position 3 is still ahead and within bounds.
    assert_eq!(flow.get_item_at_step(3).unwrap(), (3, 3));
}

#[test]
fn get_item_at_step_requires_a_reiterable_source() {
    let source = Source::single_pass((0..4).map(|x| x * 10));
    let mut flow = Flow::new(source, FlowOptions::new().with_total(4));

    assert!(matches!(
        flow.get_item_at_step(2),
        Err(FlowError::SeekUnsupported)
    ));
    // The failed seek consumed nothing.
    assert_eq!(flow.try_next().unwrap(), Some((0, 0)));
}

#[test]
fn fast_forward_past_the_end_is_quiet() {
    let mut flow = Flow::over(vec![1, 2]);
    flow.fast_forward(50);
    assert_eq!(flow.counter(), 2);
    assert_eq!(flow.try_next().unwrap(), None);
}

#[test]
fn total_is_counted_for_reiterable_sources() {
    let flow = Flow::over(0..12);
    assert_eq!(flow.total(), Some(12));
}

#[test]
fn supplied_total_skips_the_counting_pass() {
    let flow = Flow::new(
        Source::reiterable(0..12),
        FlowOptions::new().with_total(12),
    );
    assert_eq!(flow.total(), Some(12));
}

#[test]
fn interleaved_controls_preserve_order_and_indices() {
    // Pause/resume/skip interleaved with consumption: delivered items
    // are exactly the unskipped ones, in order, with consecutive
    // indices.
    let mut flow = Flow::over(0..8).with_channel(ScriptedChannel::new(["c", "s", ""]));

    assert_eq!(flow.try_next().unwrap(), Some((0, 0)));

    flow.pause(None); // resolved by "c"
    assert_eq!(flow.try_next().unwrap(), Some((1, 1)));

    flow.skip(None); // drops 2
    assert_eq!(flow.try_next().unwrap(), Some((2, 3)));

    flow.pause(None); // "s" drops 4, "" resumes
    assert_eq!(flow.try_next().unwrap(), Some((3, 5)));

    flow.stop(None);
    assert_eq!(flow.try_next().unwrap(), None);
}
