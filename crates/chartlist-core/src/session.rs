//! A list view wired to a selection notifier.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use tracing::debug;

use crate::format::ValueFormatter;
use crate::notify::{SelectionNotifier, SubscribeOptions, Subscription};
use crate::view::{ListAction, ListItemsView};

/// Keeps a [`ListItemsView`] in sync with the host's selection.
///
/// The view is refreshed on every selection change and whenever an action
/// changes mode or filter. Dropping the session unsubscribes it.
pub struct ListSession {
    view: Rc<RefCell<ListItemsView>>,
    notifier: SelectionNotifier,
    formatter: Rc<dyn ValueFormatter>,
    subscription: Subscription,
}

impl ListSession {
    pub fn attach(
        notifier: &SelectionNotifier,
        view: ListItemsView,
        formatter: Rc<dyn ValueFormatter>,
    ) -> Self {
        let view = Rc::new(RefCell::new(view));
        let subscription = {
            let view = Rc::clone(&view);
            let formatter = Rc::clone(&formatter);
            notifier.subscribe(
                move |selection, context| {
                    view.borrow_mut()
                        .on_selection_change(selection, context, formatter.as_ref());
                },
                SubscribeOptions::dispatch_now(),
            )
        };
        Self {
            view,
            notifier: notifier.clone(),
            formatter,
            subscription,
        }
    }

    /// Apply `action` to the view, refreshing it from the notifier's current
    /// selection when the mode or filter changes.
    ///
    /// Once detached there is nothing to refresh from, so mode and filter
    /// actions are ignored; sorting still applies to the rows on hand.
    pub fn dispatch(&self, action: ListAction) {
        if !self.subscription.is_active() && !matches!(action, ListAction::Sort(_)) {
            debug!(?action, "ignoring action on detached list");
            return;
        }
        let needs_refresh = self.view.borrow_mut().dispatch(action);
        if needs_refresh {
            let (selection, context) = self.notifier.current();
            self.view
                .borrow_mut()
                .on_selection_change(&selection, &context, self.formatter.as_ref());
        }
    }

    pub fn view(&self) -> Ref<'_, ListItemsView> {
        self.view.borrow()
    }

    pub fn view_mut(&self) -> RefMut<'_, ListItemsView> {
        self.view.borrow_mut()
    }

    pub fn formatter(&self) -> &dyn ValueFormatter {
        self.formatter.as_ref()
    }

    /// Stop following selection changes. The view keeps its last state.
    pub fn detach(&self) {
        self.subscription.cancel();
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_active()
    }
}
