//! Hierarchical progress reporting.
//!
//! A [`Progress`] counts completed units against a total. Children can be
//! attached with a pending weight: while a child runs, its fraction counts
//! towards the parent in proportion to that weight. The weight is added to
//! the parent's completed count exactly once, when [`Progress::finish`] is
//! called on the child. Reaching the child's own total does not report it.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

#[derive(Debug)]
struct ChildLink {
    child: Arc<ProgressInner>,
    pending: u64,
}

#[derive(Debug, Default)]
struct ProgressInner {
    total: AtomicU64,
    completed: AtomicU64,
    finished: AtomicBool,
    /// Set by an explicit `finish`; the weight has gone to the parent.
    reported: AtomicBool,
    cancelled: AtomicBool,
    children: Mutex<Vec<ChildLink>>,
    parent: Mutex<Option<Weak<ProgressInner>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ProgressInner {
    fn complete_units(self: &Arc<Self>, units: u64) {
        if units == 0 || self.finished.load(Ordering::Acquire) {
            return;
        }
        let completed = self.completed.fetch_add(units, Ordering::AcqRel) + units;
        let total = self.total.load(Ordering::Acquire);
        if total > 0 && completed >= total {
            self.finished.store(true, Ordering::Release);
        }
    }

    fn finish(self: &Arc<Self>) {
        self.finished.store(true, Ordering::Release);
        self.completed.fetch_max(self.total.load(Ordering::Acquire), Ordering::AcqRel);
        if self.reported.swap(true, Ordering::AcqRel) {
            return;
        }

        let Some(parent) = lock(&self.parent).take().and_then(|weak| weak.upgrade()) else {
            return;
        };
        let pending = {
            let mut children = lock(&parent.children);
            children
                .iter()
                .position(|link| Arc::ptr_eq(&link.child, self))
                .map(|index| children.remove(index).pending)
        };
        if let Some(pending) = pending {
            parent.complete_units(pending);
        }
    }

    fn fraction(&self) -> f64 {
        let total = self.total.load(Ordering::Acquire);
        if total == 0 {
            return if self.finished.load(Ordering::Acquire) { 1.0 } else { 0.0 };
        }
        let completed = self.completed.load(Ordering::Acquire) as f64;
        let in_flight: f64 = lock(&self.children)
            .iter()
            .map(|link| link.pending as f64 * link.child.fraction())
            .sum();
        ((completed + in_flight) / total as f64).min(1.0)
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        let children: Vec<Arc<ProgressInner>> =
            lock(&self.children).iter().map(|link| Arc::clone(&link.child)).collect();
        for child in children {
            child.cancel();
        }
    }
}

/// A clonable handle to a progress counter. Clones share state.
#[derive(Clone, Debug)]
pub struct Progress {
    inner: Arc<ProgressInner>,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Progress {
    pub fn new(total: u64) -> Self {
        let inner = ProgressInner::default();
        inner.total.store(total, Ordering::Release);
        Self { inner: Arc::new(inner) }
    }

    pub fn total_unit_count(&self) -> u64 {
        self.inner.total.load(Ordering::Acquire)
    }

    pub fn completed_unit_count(&self) -> u64 {
        self.inner.completed.load(Ordering::Acquire)
    }

    /// Replaces the total. Does not finish the tracker even if the completed
    /// count already reaches the new total.
    pub fn set_total(&self, total: u64) {
        self.inner.total.store(total, Ordering::Release);
    }

    /// Adds `units` to the completed count. Reaching a non-zero total marks
    /// the tracker finished, but only [`finish`](Self::finish) reports it to
    /// the parent.
    pub fn complete_units(&self, units: u64) {
        self.inner.complete_units(units);
    }

    /// Marks the tracker as complete and reports its pending weight to the
    /// parent. Calling it again has no effect.
    pub fn finish(&self) {
        self.inner.finish();
    }

    pub fn is_finished(&self) -> bool {
        self.inner.finished.load(Ordering::Acquire)
    }

    /// Fraction in `0.0..=1.0`, including partial progress of attached children.
    pub fn fraction_completed(&self) -> f64 {
        self.inner.fraction()
    }

    /// Attaches `child` so that its completion contributes `pending` units to
    /// this tracker. A child whose `finish` was already called contributes at
    /// once.
    pub fn add_child(&self, child: &Progress, pending: u64) {
        if child.inner.reported.load(Ordering::Acquire) {
            self.complete_units(pending);
            return;
        }
        *lock(&child.inner.parent) = Some(Arc::downgrade(&self.inner));
        lock(&self.inner.children).push(ChildLink { child: Arc::clone(&child.inner), pending });
        if self.is_cancelled() {
            child.cancel();
        }
    }

    /// Raises the cancellation flag here and on every attached child.
    /// Nothing stops on its own; work that wants to honour it must poll
    /// [`is_cancelled`](Self::is_cancelled).
    pub fn cancel(&self) {
        self.inner.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }
}
