//! Selection-change notifications from the host chart.
//!
//! Listeners are called synchronously, in registration order, with the new
//! selection and the chart context. Each `publish` fully supersedes the
//! previous state. Cancelling a [`Subscription`] removes its listener; a
//! listener cancelled while a dispatch is running is skipped for the rest of
//! that dispatch. A listener that publishes from inside its callback ends the
//! outer dispatch: listeners not yet reached only see the newer selection.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use chartlist_model::{ChartSchema, Selection};
use tracing::{debug, trace, warn};

/// Application handle passed to listeners alongside the selection.
#[derive(Debug, Clone, Default)]
pub struct ChartContext {
    schema: ChartSchema,
}

impl ChartContext {
    pub fn new(schema: ChartSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &ChartSchema {
        &self.schema
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubscribeOptions {
    /// Also call the listener immediately with the current state.
    pub dispatch_now: bool,
}

impl SubscribeOptions {
    pub fn dispatch_now() -> Self {
        Self { dispatch_now: true }
    }
}

type Listener = Rc<RefCell<dyn FnMut(&Selection, &ChartContext)>>;

#[derive(Clone)]
struct ListenerSlot {
    id: u64,
    active: Rc<Cell<bool>>,
    callback: Listener,
}

struct NotifierState {
    listeners: Vec<ListenerSlot>,
    next_id: u64,
    /// Bumped by every publish.
    generation: u64,
    selection: Rc<Selection>,
    context: Rc<ChartContext>,
}

/// Holds the current chart selection and the listeners interested in it.
///
/// Cloning yields another handle to the same notifier.
#[derive(Clone)]
pub struct SelectionNotifier {
    state: Rc<RefCell<NotifierState>>,
}

impl SelectionNotifier {
    pub fn new(selection: Selection, context: ChartContext) -> Self {
        Self {
            state: Rc::new(RefCell::new(NotifierState {
                listeners: Vec::new(),
                next_id: 0,
                generation: 0,
                selection: Rc::new(selection),
                context: Rc::new(context),
            })),
        }
    }

    /// Register `listener` for future selection changes.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// cancelled or dropped.
    #[must_use = "dropping the subscription unsubscribes the listener"]
    pub fn subscribe<F>(&self, listener: F, options: SubscribeOptions) -> Subscription
    where
        F: FnMut(&Selection, &ChartContext) + 'static,
    {
        let callback: Listener = Rc::new(RefCell::new(listener));
        let active = Rc::new(Cell::new(true));
        let (id, selection, context) = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.push(ListenerSlot {
                id,
                active: Rc::clone(&active),
                callback: Rc::clone(&callback),
            });
            (id, Rc::clone(&state.selection), Rc::clone(&state.context))
        };
        debug!(listener = id, dispatch_now = options.dispatch_now, "subscribed");

        if options.dispatch_now {
            deliver(id, &callback, &selection, &context);
        }

        Subscription {
            id,
            active,
            state: Rc::downgrade(&self.state),
        }
    }

    /// Replace the current selection and notify every live listener.
    pub fn publish(&self, selection: Selection, context: ChartContext) {
        let selection = Rc::new(selection);
        let context = Rc::new(context);
        let (generation, listeners) = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.selection = Rc::clone(&selection);
            state.context = Rc::clone(&context);
            state.listeners.retain(|slot| slot.active.get());
            (state.generation, state.listeners.clone())
        };
        trace!(
            generation,
            listeners = listeners.len(),
            records = selection.record_count(),
            "publishing selection change"
        );
        for slot in &listeners {
            if self.state.borrow().generation != generation {
                debug!(generation, "selection superseded during dispatch");
                break;
            }
            if slot.active.get() {
                deliver(slot.id, &slot.callback, &selection, &context);
            }
        }
    }

    /// The most recently published selection and context.
    pub fn current(&self) -> (Rc<Selection>, Rc<ChartContext>) {
        let state = self.state.borrow();
        (Rc::clone(&state.selection), Rc::clone(&state.context))
    }

    pub fn listener_count(&self) -> usize {
        self.state
            .borrow()
            .listeners
            .iter()
            .filter(|slot| slot.active.get())
            .count()
    }
}

fn deliver(id: u64, callback: &Listener, selection: &Selection, context: &ChartContext) {
    match callback.try_borrow_mut() {
        Ok(mut callback) => (&mut *callback)(selection, context),
        Err(_) => warn!(listener = id, "listener is already running; skipping nested delivery"),
    }
}

/// Handle for a registered listener.
///
/// Cancelling is idempotent and takes effect immediately: no delivery starts
/// after `cancel` returns. Dropping the handle cancels it.
pub struct Subscription {
    id: u64,
    active: Rc<Cell<bool>>,
    state: Weak<RefCell<NotifierState>>,
}

impl Subscription {
    pub fn cancel(&self) {
        if !self.active.replace(false) {
            return;
        }
        debug!(listener = self.id, "unsubscribed");
        if let Some(state) = self.state.upgrade() {
            // Inactive slots are pruned on the next publish if the state is busy.
            if let Ok(mut state) = state.try_borrow_mut() {
                state.listeners.retain(|slot| slot.id != self.id);
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.active.get())
            .finish()
    }
}
