//! Raw slot buffer backing the elastic stacks
//!
//! # Safety
//!
//! This module owns the single unsafe surface of the crate: a manually
//! managed contiguous allocation of `capacity` slots of `T` (the spine).
//!
//! ## Invariants
//!
//! - `spine` points to a live allocation of exactly `capacity` slots,
//!   or is dangling when `T` is zero-sized or `capacity == 0`
//! - Which slots are initialized is the caller's contract; the buffer
//!   itself never reads a slot
//! - `reallocate` moves the initialized prefix with a bitwise copy; the
//!   old spine is released without running element destructors (the
//!   copies in the new spine own the values)
//! - `Drop` releases the spine only; the owner drops live elements first
//!   via `drop_live`
//!
//! ## Zero-sized types
//!
//! No allocation is ever performed for zero-sized `T`. The spine stays
//! dangling and capacity changes are pure bookkeeping, so the grow/shrink
//! policy remains observable through `capacity()`.

use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};
use std::alloc::{alloc, dealloc};

use crate::error::{StackError, StackResult};

/// Manually managed slot storage: spine pointer plus slot count
pub(crate) struct SlotBuffer<T> {
    spine: NonNull<T>,
    capacity: usize,
    /// The buffer logically owns its `T`s even though it never drops them
    /// itself; the marker keeps auto traits honest about that.
    _marker: PhantomData<T>,
}

// SAFETY: SlotBuffer exclusively owns its spine allocation.
// - Moving the buffer moves ownership of the spine with it
// - No aliasing: the spine pointer is never shared outside the crate
// - Element values are plain T, so Send follows from T: Send
unsafe impl<T: Send> Send for SlotBuffer<T> {}

// SAFETY: Shared references to the buffer only permit reads.
// - All writes go through &mut self
// - Sync follows from T: Sync for the borrowed elements
unsafe impl<T: Sync> Sync for SlotBuffer<T> {}

impl<T> SlotBuffer<T> {
    /// Allocate a spine of `capacity` slots
    ///
    /// Fails with `AllocationFailed` when the allocator returns null or
    /// the layout does not fit an allocation request.
    pub(crate) fn allocate(capacity: usize) -> StackResult<Self> {
        if mem::size_of::<T>() == 0 || capacity == 0 {
            return Ok(Self {
                spine: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }

        let layout = Layout::array::<T>(capacity).map_err(|_| {
            StackError::allocation_failed(
                capacity.saturating_mul(mem::size_of::<T>()),
                mem::align_of::<T>(),
            )
        })?;

        // SAFETY: layout has non-zero size (zero-sized cases returned above).
        let raw = unsafe { alloc(layout) };
        let Some(spine) = NonNull::new(raw.cast::<T>()) else {
            return Err(StackError::allocation_failed_with_layout(layout));
        };

        Ok(Self {
            spine,
            capacity,
            _marker: PhantomData,
        })
    }

    /// Current slot count
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Replace the spine with one of `new_capacity` slots, carrying over
    /// the `live` initialized prefix
    ///
    /// On failure the buffer is untouched: same spine, same capacity,
    /// same contents.
    pub(crate) fn reallocate(&mut self, new_capacity: usize, live: usize) -> StackResult<()> {
        debug_assert!(live <= self.capacity);
        debug_assert!(live <= new_capacity);

        if mem::size_of::<T>() == 0 {
            // Bookkeeping only; there is no allocation to move.
            self.capacity = new_capacity;
            return Ok(());
        }

        let mut fresh = Self::allocate(new_capacity)?;
        if live > 0 {
            // SAFETY: Moving the initialized prefix to the new spine.
            // - Source and destination are separate allocations (no overlap)
            // - live <= self.capacity, so the source range is in bounds
            // - live <= new_capacity, so the destination range is in bounds
            // - After the copy the new spine owns the values; the old spine
            //   holds dead bit copies that must not be dropped, and
            //   SlotBuffer::drop never drops elements
            unsafe {
                ptr::copy_nonoverlapping(self.spine.as_ptr(), fresh.spine.as_ptr(), live);
            }
        }

        // The old spine rides out in `fresh` and is released by its Drop.
        mem::swap(self, &mut fresh);
        Ok(())
    }

    /// Write `value` into a slot
    ///
    /// # Safety
    /// - `index < capacity`
    /// - The slot must be uninitialized, or its previous value leaks
    pub(crate) unsafe fn write(&mut self, index: usize, value: T) {
        debug_assert!(index < self.capacity);
        // SAFETY: index is in bounds per the caller contract; for
        // zero-sized T the dangling spine is aligned and writes are no-ops.
        unsafe { ptr::write(self.spine.as_ptr().add(index), value) }
    }

    /// Move the value out of a slot, leaving it uninitialized
    ///
    /// # Safety
    /// - `index < capacity`
    /// - The slot must hold an initialized value, and the caller must
    ///   stop treating it as initialized afterwards
    pub(crate) unsafe fn read(&mut self, index: usize) -> T {
        debug_assert!(index < self.capacity);
        // SAFETY: the slot is initialized per the caller contract;
        // ownership transfers to the returned value.
        unsafe { ptr::read(self.spine.as_ptr().add(index)) }
    }

    /// Borrow the value in a slot
    ///
    /// # Safety
    /// - `index < capacity`
    /// - The slot must hold an initialized value
    pub(crate) unsafe fn peek(&self, index: usize) -> &T {
        debug_assert!(index < self.capacity);
        // SAFETY: the slot is initialized per the caller contract; the
        // borrow is tied to &self, so no mutation can invalidate it.
        unsafe { &*self.spine.as_ptr().add(index) }
    }

    /// Run destructors for the initialized prefix `[0, live)`
    ///
    /// # Safety
    /// - Slots `[0, live)` must all hold initialized values
    /// - The caller must stop treating them as initialized afterwards
    pub(crate) unsafe fn drop_live(&mut self, live: usize) {
        debug_assert!(live <= self.capacity);
        // SAFETY: the prefix is initialized per the caller contract;
        // dropping a slice in place runs each destructor exactly once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.spine.as_ptr(), live));
        }
    }
}

impl<T> Drop for SlotBuffer<T> {
    fn drop(&mut self) {
        if mem::size_of::<T>() == 0 || self.capacity == 0 {
            return;
        }
        // Layout::array succeeded for this capacity when the spine was
        // allocated, so it cannot fail here.
        if let Ok(layout) = Layout::array::<T>(self.capacity) {
            // SAFETY: the spine was allocated with exactly this layout and
            // has not been released; elements were dropped by the owner.
            unsafe { dealloc(self.spine.as_ptr().cast::<u8>(), layout) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_allocate_and_roundtrip() {
        let mut buffer: SlotBuffer<u64> = SlotBuffer::allocate(4).unwrap();
        assert_eq!(buffer.capacity(), 4);

        unsafe {
            buffer.write(0, 7);
            buffer.write(1, 11);
            assert_eq!(*buffer.peek(0), 7);
            assert_eq!(buffer.read(1), 11);
            assert_eq!(buffer.read(0), 7);
        }
    }

    #[test]
    fn test_reallocate_preserves_prefix() {
        let mut buffer: SlotBuffer<String> = SlotBuffer::allocate(2).unwrap();
        unsafe {
            buffer.write(0, String::from("bottom"));
            buffer.write(1, String::from("top"));
        }

        buffer.reallocate(8, 2).unwrap();
        assert_eq!(buffer.capacity(), 8);

        unsafe {
            assert_eq!(buffer.peek(0), "bottom");
            assert_eq!(buffer.peek(1), "top");
            buffer.drop_live(2);
        }
    }

    #[test]
    fn test_reallocate_down() {
        let mut buffer: SlotBuffer<u32> = SlotBuffer::allocate(16).unwrap();
        unsafe {
            buffer.write(0, 1);
            buffer.write(1, 2);
        }

        buffer.reallocate(4, 2).unwrap();
        assert_eq!(buffer.capacity(), 4);
        unsafe {
            assert_eq!(buffer.read(0), 1);
            assert_eq!(buffer.read(1), 2);
        }
    }

    #[test]
    fn test_zero_sized_elements() {
        let mut buffer: SlotBuffer<()> = SlotBuffer::allocate(16).unwrap();
        assert_eq!(buffer.capacity(), 16);

        unsafe {
            buffer.write(0, ());
            buffer.write(15, ());
            buffer.read(15);
        }

        buffer.reallocate(32, 1).unwrap();
        assert_eq!(buffer.capacity(), 32);
        unsafe { buffer.drop_live(1) };
    }

    #[test]
    fn test_drop_live_runs_destructors() {
        let tracker = Rc::new(());
        let mut buffer: SlotBuffer<Rc<()>> = SlotBuffer::allocate(4).unwrap();
        unsafe {
            buffer.write(0, Rc::clone(&tracker));
            buffer.write(1, Rc::clone(&tracker));
            buffer.write(2, Rc::clone(&tracker));
        }
        assert_eq!(Rc::strong_count(&tracker), 4);

        unsafe { buffer.drop_live(3) };
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_drop_without_elements_is_clean() {
        let buffer: SlotBuffer<Vec<u8>> = SlotBuffer::allocate(8).unwrap();
        assert_eq!(buffer.capacity(), 8);
        drop(buffer);
    }
}
