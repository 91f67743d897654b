//! Controlled iteration: the next-item protocol, steering, and
//! step-seek.
//!
//! A [`Flow`] wraps a [`Source`] and yields `(index, item)` pairs. Four
//! imperative controls steer it: pause, resume, skip, stop. While
//! paused, every advance consults the interaction channel until a
//! command resumes or stops the flow. An optional skip predicate
//! silently drops matching items without delivering them.

mod controller;
mod state;

pub use controller::FlowController;
pub use state::FlowState;

use std::fmt;

use tracing::error;

use crate::channel::{Command, ConsoleChannel, InteractionChannel};
use crate::error::FlowError;
use crate::source::Source;

/// Construction options for a [`Flow`].
#[derive(Debug, Clone, Copy)]
pub struct FlowOptions {
    /// Known length of the source. When omitted on a reiterable source
    /// it is computed by consuming one fresh pass at construction, which
    /// can be expensive; single-pass sources keep it unknown.
    pub total: Option<usize>,
    /// Emit action messages to the log sink.
    pub verbose: bool,
    /// Restore the pre-seek position after [`Flow::get_item_at_step`].
    pub restart_after_seek: bool,
}

impl Default for FlowOptions {
    fn default() -> Self {
        Self {
            total: None,
            verbose: false,
            restart_after_seek: true,
        }
    }
}

impl FlowOptions {
    /// Creates options with the defaults: unknown total, quiet, restore
    /// after seek.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplies the source length up front, skipping the counting pass.
    /// Required for step-seek bounds over sources whose length cannot be
    /// computed.
    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }

    /// Sets whether action messages are emitted to the log sink.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets whether [`Flow::get_item_at_step`] restores the pre-seek
    /// position afterwards.
    pub fn with_restart_after_seek(mut self, enabled: bool) -> Self {
        self.restart_after_seek = enabled;
        self
    }
}

/// Stateful wrapper producing `(index, item)` pairs from a source while
/// honoring pause/resume/skip/stop steering and a per-item skip
/// predicate.
///
/// The yielded index is consecutive over delivered items, starting at 0.
/// The internal counter is a different quantity: it tracks every item
/// pulled from the source, skipped ones included, and is what generated
/// messages and step-seek positions refer to.
///
/// A flow is strictly single-threaded and must be driven by one logical
/// caller; use [`Flow::controller`] to steer it from inside the
/// consuming loop.
///
/// # Examples
///
/// ```
/// use flowstep::Flow;
///
/// let mut flow = Flow::over(vec!["a", "b", "c"]).with_skip_condition(|s: &&str| *s == "b");
/// assert_eq!(flow.next(), Some((0, "a")));
/// assert_eq!(flow.next(), Some((1, "c")));
/// assert_eq!(flow.next(), None);
/// ```
pub struct Flow<T> {
    source: Source<T>,
    total: Option<usize>,
    delivered: usize,
    exhausted: bool,
    restart_after_seek: bool,
    skip_condition: Box<dyn Fn(&T) -> bool>,
    channel: Box<dyn InteractionChannel>,
    controller: FlowController,
}

impl<T> Flow<T> {
    /// Wraps `source` with the given options, a never-skip predicate,
    /// and the console interaction channel.
    ///
    /// When `options.total` is omitted and the source is reiterable, one
    /// fresh pass is consumed here to count it.
    pub fn new(source: Source<T>, options: FlowOptions) -> Self {
        let total = options.total.or_else(|| source.count_fresh());
        Self {
            source,
            total,
            delivered: 0,
            exhausted: false,
            restart_after_seek: options.restart_after_seek,
            skip_condition: Box::new(|_| false),
            channel: Box::new(ConsoleChannel),
            controller: FlowController::new(options.verbose),
        }
    }

    /// Convenience constructor: wraps a clonable collection as a
    /// reiterable source with default options.
    pub fn over<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T> + Clone + 'static,
    {
        Self::new(Source::reiterable(collection), FlowOptions::default())
    }

    /// Replaces the never-skip default predicate. Matching items are
    /// consumed from the source but never delivered.
    pub fn with_skip_condition<F>(mut self, condition: F) -> Self
    where
        F: Fn(&T) -> bool + 'static,
    {
        self.skip_condition = Box::new(condition);
        self
    }

    /// Replaces the console channel. Scripted channels or closures serve
    /// tests and unattended runs.
    pub fn with_channel<C>(mut self, channel: C) -> Self
    where
        C: InteractionChannel + 'static,
    {
        self.channel = Box::new(channel);
        self
    }

    /// Handle sharing this flow's control state, for steering from
    /// inside the consuming loop.
    pub fn controller(&self) -> FlowController {
        self.controller.clone()
    }

    /// Known length of the source, if any.
    pub fn total(&self) -> Option<usize> {
        self.total
    }

    /// Items pulled from the source so far, skipped ones included.
    pub fn counter(&self) -> usize {
        self.controller.counter()
    }

    /// Index the next delivered item will carry.
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// Current disposition.
    pub fn state(&self) -> FlowState {
        self.controller.state()
    }

    /// See [`FlowController::pause`].
    pub fn pause(&mut self, message: Option<&str>) {
        self.controller.pause(message);
    }

    /// See [`FlowController::resume`].
    pub fn resume(&mut self, message: Option<&str>) {
        self.controller.resume(message);
    }

    /// See [`FlowController::skip`].
    pub fn skip(&mut self, message: Option<&str>) {
        self.controller.skip(message);
    }

    /// See [`FlowController::stop`].
    pub fn stop(&mut self, message: Option<&str>) {
        self.controller.stop(message);
    }

    /// Advances to the next deliverable item.
    ///
    /// `Ok(None)` is the end-of-sequence signal: the source ran dry or
    /// the flow was stopped. Once signaled, the flow stays exhausted.
    /// The only failure source is the interaction channel, consulted
    /// while paused.
    pub fn try_next(&mut self) -> Result<Option<(usize, T)>, FlowError> {
        loop {
            if self.controller.is_stopped() {
                return Ok(None);
            }
            while self.controller.is_paused() {
                self.resolve_pause()?;
            }
            // Pause resolution may have stopped the flow.
            if self.controller.is_stopped() {
                return Ok(None);
            }
            if self.exhausted {
                return Ok(None);
            }
            let Some(item) = self.source.next() else {
                self.exhausted = true;
                return Ok(None);
            };
            if self.controller.pending_skip() || (self.skip_condition)(&item) {
                self.controller.clear_pending_skip();
                self.controller.bump_counter();
                continue;
            }
            let index = self.delivered;
            self.delivered += 1;
            self.controller.bump_counter();
            return Ok(Some((index, item)));
        }
    }

    /// One round of the pause decision loop: reads a command from the
    /// channel and applies it. A skip command stays paused on purpose,
    /// so the next reply decides the continuation. Every message slot is
    /// cleared once the reply has been applied.
    fn resolve_pause(&mut self) -> Result<(), FlowError> {
        let reply = self.channel.read_command()?;
        match Command::parse(&reply) {
            Command::Resume => self.controller.resume(None),
            Command::Skip => self.controller.skip(None),
            Command::Stop => self.controller.stop(None),
        }
        self.controller.clear_messages();
        Ok(())
    }

    /// Runs the next-item protocol `steps` times, discarding results.
    ///
    /// End-of-sequence is swallowed. A failing step is logged at error
    /// level with its step number and the remaining steps still run;
    /// this is the one place failures are deliberately not propagated.
    pub fn fast_forward(&mut self, steps: usize) {
        for step in 0..steps {
            if let Err(err) = self.try_next() {
                error!(step, "fast-forward step failed: {err}");
            }
        }
    }

    /// Retrieves the `(index, item)` pair at source position `step`.
    ///
    /// Positions are counted in source pulls (the counter), so with an
    /// active skip predicate the delivered pair may sit past `step` when
    /// the predicate rejects the item at that exact position.
    ///
    /// Requires a reiterable source: with restore enabled (the default)
    /// the source is re-wrapped in a fresh pass afterwards and replayed
    /// forward, so sequential iteration continues exactly where it would
    /// have without the seek. With restore disabled, iteration continues
    /// from after the sought item.
    ///
    /// Fails [`FlowError::SeekUnsupported`] on single-pass sources and
    /// [`FlowError::OutOfRange`] when `step` was already passed or lies
    /// beyond the known total.
    pub fn get_item_at_step(&mut self, step: usize) -> Result<(usize, T), FlowError> {
        if !self.source.is_reiterable() {
            return Err(FlowError::SeekUnsupported);
        }
        let total = self.total.ok_or(FlowError::SeekUnsupported)?;
        let saved = self.controller.counter();
        if step < saved || step >= total {
            return Err(FlowError::OutOfRange {
                step,
                counter: saved,
                total,
            });
        }

        self.advance_to(step);
        let sought = self.try_next()?;

        if self.restart_after_seek {
            self.rewind();
            self.advance_to(saved);
        }

        // The skip predicate can consume everything from `step` to the
        // end of the source without delivering.
        sought.ok_or(FlowError::OutOfRange {
            step,
            counter: saved,
            total,
        })
    }

    /// Drives the next-item protocol until the pull counter reaches
    /// `target` or the sequence ends. A failing step aborts the
    /// remaining distance after logging, rather than spinning on the
    /// same error.
    fn advance_to(&mut self, target: usize) {
        while self.controller.counter() < target {
            match self.try_next() {
                Ok(Some(_)) => {}
                Ok(None) => break,
                Err(err) => {
                    let position = self.controller.counter();
                    error!(position, "seek toward {target} failed: {err}");
                    break;
                }
            }
        }
    }

    /// Swaps in a fresh source pass and resets position bookkeeping.
    /// The counter reset here is the one sanctioned decrease.
    fn rewind(&mut self) {
        self.source.restart();
        self.controller.reset_counter();
        self.delivered = 0;
        self.exhausted = false;
    }
}

impl<T> Iterator for Flow<T> {
    type Item = (usize, T);

    /// Infallible view of [`Flow::try_next`]: a channel failure is
    /// logged and treated as a stop.
    fn next(&mut self) -> Option<Self::Item> {
        match self.try_next() {
            Ok(next) => next,
            Err(err) => {
                error!("interaction channel failed, stopping the flow: {err}");
                self.controller.stop(None);
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted || self.controller.is_stopped() {
            return (0, Some(0));
        }
        (
            0,
            self.total
                .map(|total| total.saturating_sub(self.controller.counter())),
        )
    }
}

impl<T> fmt::Debug for Flow<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flow")
            .field("source", &self.source)
            .field("state", &self.controller.state())
            .field("counter", &self.controller.counter())
            .field("delivered", &self.delivered)
            .field("total", &self.total)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}
