//! Integration tests for selection-change notifications.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use chartlist_core::{ChartContext, SelectionNotifier, SubscribeOptions};
use chartlist_model::Selection;

use common::{person, schema, two_people};

type Log = Rc<RefCell<Vec<String>>>;

fn notifier() -> SelectionNotifier {
    SelectionNotifier::new(Selection::empty(), ChartContext::new(schema()))
}

/// Listener that records `name:<record count>` for each delivery.
fn recorder(log: &Log, name: &'static str) -> impl FnMut(&Selection, &ChartContext) + 'static {
    let log = Rc::clone(log);
    move |selection: &Selection, _context: &ChartContext| {
        log.borrow_mut()
            .push(format!("{name}:{}", selection.record_count()));
    }
}

#[test]
fn dispatch_now_delivers_current_state() {
    let notifier = SelectionNotifier::new(two_people(), ChartContext::new(schema()));
    let log = Log::default();

    let _now = notifier.subscribe(recorder(&log, "now"), SubscribeOptions::dispatch_now());
    let _later = notifier.subscribe(recorder(&log, "later"), SubscribeOptions::default());

    assert_eq!(*log.borrow(), ["now:2"]);
}

#[test]
fn listeners_run_in_registration_order() {
    let notifier = notifier();
    let log = Log::default();
    let _a = notifier.subscribe(recorder(&log, "a"), SubscribeOptions::default());
    let _b = notifier.subscribe(recorder(&log, "b"), SubscribeOptions::default());
    let _c = notifier.subscribe(recorder(&log, "c"), SubscribeOptions::default());

    notifier.publish(two_people(), ChartContext::new(schema()));

    assert_eq!(*log.borrow(), ["a:2", "b:2", "c:2"]);
}

#[test]
fn cancel_is_idempotent_and_stops_delivery() {
    let notifier = notifier();
    let log = Log::default();
    let subscription = notifier.subscribe(recorder(&log, "a"), SubscribeOptions::default());
    assert_eq!(notifier.listener_count(), 1);

    subscription.cancel();
    subscription.cancel();
    assert!(!subscription.is_active());
    assert_eq!(notifier.listener_count(), 0);

    notifier.publish(two_people(), ChartContext::new(schema()));
    assert!(log.borrow().is_empty());
}

#[test]
fn dropping_subscription_unsubscribes() {
    let notifier = notifier();
    let log = Log::default();
    {
        let _subscription = notifier.subscribe(recorder(&log, "a"), SubscribeOptions::default());
        notifier.publish(two_people(), ChartContext::new(schema()));
    }
    notifier.publish(two_people(), ChartContext::new(schema()));

    assert_eq!(*log.borrow(), ["a:2"]);
    assert_eq!(notifier.listener_count(), 0);
}

#[test]
fn listener_cancelled_mid_dispatch_is_skipped() {
    let notifier = notifier();
    let log = Log::default();
    let victim = Rc::new(RefCell::new(None));

    let _first = {
        let victim = Rc::clone(&victim);
        let log = Rc::clone(&log);
        notifier.subscribe(
            move |_selection: &Selection, _context: &ChartContext| {
                log.borrow_mut().push("first".to_string());
                if let Some(subscription) = victim.borrow_mut().take() {
                    drop(subscription);
                }
            },
            SubscribeOptions::default(),
        )
    };
    let second = notifier.subscribe(recorder(&log, "second"), SubscribeOptions::default());
    *victim.borrow_mut() = Some(second);

    notifier.publish(two_people(), ChartContext::new(schema()));
    notifier.publish(two_people(), ChartContext::new(schema()));

    assert_eq!(*log.borrow(), ["first", "first"]);
    assert_eq!(notifier.listener_count(), 1);
}

#[test]
fn latest_publish_supersedes_earlier_state() {
    let notifier = notifier();
    notifier.publish(two_people(), ChartContext::new(schema()));
    notifier.publish(
        Selection::new(vec![person("e9", "Zed")], vec![]),
        ChartContext::new(schema()),
    );

    let (selection, _context) = notifier.current();
    assert_eq!(selection.record_count(), 1);

    let log = Log::default();
    let _late = notifier.subscribe(recorder(&log, "late"), SubscribeOptions::dispatch_now());
    assert_eq!(*log.borrow(), ["late:1"]);
}

#[test]
fn publish_from_listener_supersedes_outer_dispatch() {
    let notifier = notifier();
    let log = Log::default();

    let _republisher = {
        let inner = notifier.clone();
        notifier.subscribe(
            move |selection: &Selection, _context: &ChartContext| {
                if selection.record_count() == 1 {
                    inner.publish(two_people(), ChartContext::new(schema()));
                }
            },
            SubscribeOptions::default(),
        )
    };
    let _follower = notifier.subscribe(recorder(&log, "b"), SubscribeOptions::default());

    notifier.publish(
        Selection::new(vec![person("e9", "Zed")], vec![]),
        ChartContext::new(schema()),
    );

    let (current, _context) = notifier.current();
    assert_eq!(current.record_count(), 2);
    assert_eq!(*log.borrow(), ["b:2"]);
}

#[test]
fn subscription_outliving_notifier_cancels_quietly() {
    let log = Log::default();
    let subscription = {
        let notifier = notifier();
        notifier.subscribe(recorder(&log, "a"), SubscribeOptions::default())
    };

    assert!(subscription.is_active());
    subscription.cancel();
    assert!(!subscription.is_active());
}
