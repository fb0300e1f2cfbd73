//! Reader/writer lock with re-entrancy detection
//!
//! Wraps `parking_lot::RwLock` and records, per thread, which locks the thread
//! currently holds. Acquiring a lock the thread already holds (in either mode)
//! panics instead of deadlocking. This is what catches a range callback that
//! calls back into the map it is iterating.

use std::cell::RefCell;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

static NEXT_LOCK_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    /// Ids of every GuardedLock the current thread holds
    static HELD: RefCell<Vec<u64>> = const { RefCell::new(Vec::new()) };
}

/// RwLock owned by a single map instance
pub(crate) struct GuardedLock<T> {
    id: u64,
    lock: RwLock<T>,
}

impl<T> GuardedLock<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            id: NEXT_LOCK_ID.fetch_add(1, Ordering::Relaxed),
            lock: RwLock::new(value),
        }
    }

    /// Acquire in shared mode
    ///
    /// # Panics
    /// If the current thread already holds this lock.
    pub(crate) fn read(&self) -> ReadGuard<'_, T> {
        enter(self.id);
        ReadGuard {
            id: self.id,
            inner: self.lock.read(),
        }
    }

    /// Acquire in exclusive mode
    ///
    /// # Panics
    /// If the current thread already holds this lock.
    pub(crate) fn write(&self) -> WriteGuard<'_, T> {
        enter(self.id);
        WriteGuard {
            id: self.id,
            inner: self.lock.write(),
        }
    }

    /// Borrow mutably without locking (exclusive access is statically known)
    pub(crate) fn get_mut(&mut self) -> &mut T {
        self.lock.get_mut()
    }

    pub(crate) fn into_inner(self) -> T {
        self.lock.into_inner()
    }
}

fn enter(id: u64) {
    HELD.with(|held| {
        let mut held = held.borrow_mut();
        if held.contains(&id) {
            drop(held);
            panic!("re-entrant access to a SortedMap already locked by this thread (range callbacks must not call back into the same map)");
        }
        held.push(id);
    });
}

fn leave(id: u64) {
    // try_with: the thread-local may already be gone during thread teardown
    let _ = HELD.try_with(|held| {
        let mut held = held.borrow_mut();
        if let Some(pos) = held.iter().rposition(|&h| h == id) {
            held.swap_remove(pos);
        }
    });
}

/// Shared guard; releases the lock and the per-thread record on drop
pub(crate) struct ReadGuard<'a, T> {
    id: u64,
    inner: RwLockReadGuard<'a, T>,
}

impl<T> Deref for ReadGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> Drop for ReadGuard<'_, T> {
    fn drop(&mut self) {
        leave(self.id);
    }
}

/// Exclusive guard; releases the lock and the per-thread record on drop
pub(crate) struct WriteGuard<'a, T> {
    id: u64,
    inner: RwLockWriteGuard<'a, T>,
}

impl<T> Deref for WriteGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> DerefMut for WriteGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T> Drop for WriteGuard<'_, T> {
    fn drop(&mut self) {
        leave(self.id);
    }
}
