// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
A reader/writer spinlock for the facade's shared state.

On the wasm main thread we can't necessarily block, so we spin instead.  Every
critical section here is a handful of map or vector operations; writers and
transforms never run while the lock is held.

Unlocking happens in guard destructors, so a panic inside a critical section
(for example a broken rule-list invariant) does not leave the lock held.
*/

use std::cell::UnsafeCell;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering::{Acquire, Relaxed, Release};

const UNLOCKED: u8 = 0;
//we allow for 254 readers or 1 writer (val = 255)
const LOCKED_WRITE: u8 = u8::MAX;

pub(crate) struct RwSpinlock<T> {
    data: UnsafeCell<T>,
    state: AtomicU8,
}

unsafe impl<T: Send> Send for RwSpinlock<T> {}
unsafe impl<T: Send + Sync> Sync for RwSpinlock<T> {}

struct ReadGuard<'a>(&'a AtomicU8);
struct WriteGuard<'a>(&'a AtomicU8);

impl Drop for ReadGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Release);
    }
}

impl Drop for WriteGuard<'_> {
    fn drop(&mut self) {
        self.0.store(UNLOCKED, Release);
    }
}

impl<T> RwSpinlock<T> {
    pub(crate) const fn new(data: T) -> Self {
        RwSpinlock {
            data: UnsafeCell::new(data),
            state: AtomicU8::new(UNLOCKED),
        }
    }

    fn lock_read(&self) -> ReadGuard<'_> {
        while self
            .state
            .fetch_update(Acquire, Relaxed, |v| {
                if v < (LOCKED_WRITE - 1) {
                    Some(v + 1)
                } else {
                    None
                }
            })
            .is_err()
        {
            std::hint::spin_loop();
        }
        ReadGuard(&self.state)
    }

    fn lock_write(&self) -> WriteGuard<'_> {
        while self
            .state
            .compare_exchange_weak(UNLOCKED, LOCKED_WRITE, Acquire, Relaxed)
            .is_err()
        {
            std::hint::spin_loop();
        }
        WriteGuard(&self.state)
    }

    /// Runs `f` with shared access.
    pub(crate) fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let _guard = self.lock_read();
        // SAFETY: the read guard excludes writers until it drops
        unsafe { f(&*self.data.get()) }
    }

    /// Runs `f` with exclusive access.
    pub(crate) fn write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let _guard = self.lock_write();
        // SAFETY: the write guard excludes everyone else until it drops
        unsafe { f(&mut *self.data.get()) }
    }
}

impl<T: Default> Default for RwSpinlock<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
