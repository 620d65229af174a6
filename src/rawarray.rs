use std::alloc::{alloc, dealloc, realloc, Layout};
use std::convert::TryFrom;
use std::ptr::NonNull;

use tracing::trace;

use crate::error::{err_oom, AllocSite, ErrorKind, RuntimeError};

/// Container lengths and capacities are counted in slots
pub type ArraySize = u32;

/// Arrays start out at this size by default
pub const DEFAULT_ARRAY_SIZE: ArraySize = 2;

/// Arrays grow at this rate by default
pub fn default_array_growth(capacity: ArraySize) -> Result<ArraySize, RuntimeError> {
    if capacity == 0 {
        Ok(DEFAULT_ARRAY_SIZE)
    } else {
        capacity
            .checked_mul(2)
            .ok_or(RuntimeError::new(ErrorKind::BadAllocationRequest))
    }
}

/// Convert a slice length into an ArraySize, failing if it can't be represented
pub fn array_size(len: usize) -> Result<ArraySize, RuntimeError> {
    ArraySize::try_from(len).map_err(|_| RuntimeError::new(ErrorKind::BadAllocationRequest))
}

/// Fundamental array type on which the tuple and list are built.
/// Analogous to RawVec. Owns its buffer, but never reads or drops the slot
/// contents, hence `T: Copy`.
pub struct RawArray<T: Copy> {
    /// Count of T-sized objects that can fit in the array
    capacity: ArraySize,
    ptr: Option<NonNull<T>>,
}

impl<T: Copy> RawArray<T> {
    /// Return a RawArray of capacity 0 with no array bytes allocated
    pub fn new() -> RawArray<T> {
        RawArray {
            capacity: 0,
            ptr: None,
        }
    }

    /// Return a RawArray with room for the given capacity number of objects
    pub fn with_capacity(
        capacity: ArraySize,
        site: AllocSite,
    ) -> Result<RawArray<T>, RuntimeError> {
        if capacity == 0 {
            return Ok(RawArray::new());
        }

        let layout = Self::layout(capacity)?;
        let ptr = NonNull::new(unsafe { alloc(layout) as *mut T }).ok_or(err_oom(site))?;

        trace!(capacity, bytes = layout.size(), "allocated {}", site);

        Ok(RawArray {
            capacity,
            ptr: Some(ptr),
        })
    }

    /// Resize the array to the new capacity, keeping the contents of slots that fit
    pub fn resize(
        &mut self,
        new_capacity: ArraySize,
        site: AllocSite,
    ) -> Result<(), RuntimeError> {
        // If we're reducing the capacity to 0, simply release the array
        if new_capacity == 0 {
            *self = RawArray::new();
            return Ok(());
        }

        match self.ptr {
            // realloc copies the old contents over and frees the old buffer
            Some(old_ptr) => {
                let old_layout = Self::layout(self.capacity)?;
                let new_layout = Self::layout(new_capacity)?;

                let new_ptr = unsafe {
                    realloc(old_ptr.as_ptr() as *mut u8, old_layout, new_layout.size()) as *mut T
                };

                // on failure the old buffer is untouched and still owned by self
                self.ptr = Some(NonNull::new(new_ptr).ok_or(err_oom(site))?);

                trace!(
                    old_capacity = self.capacity,
                    new_capacity,
                    "reallocated {}",
                    site
                );
                self.capacity = new_capacity;

                Ok(())
            }

            // If we have no capacity, create new blank capacity
            None => {
                *self = Self::with_capacity(new_capacity, site)?;
                Ok(())
            }
        }
    }

    /// Return the capacity of the array in the count of objects it can hold
    pub fn capacity(&self) -> ArraySize {
        self.capacity
    }

    /// Return a pointer to the array
    pub fn as_ptr(&self) -> Option<*mut T> {
        self.ptr.map(|ptr| ptr.as_ptr())
    }

    /// Memory layout for `capacity` objects. Zero-sized objects are refused since the
    /// allocator can't be asked for zero bytes.
    fn layout(capacity: ArraySize) -> Result<Layout, RuntimeError> {
        match Layout::array::<T>(capacity as usize) {
            Ok(layout) if layout.size() > 0 => Ok(layout),
            _ => Err(RuntimeError::new(ErrorKind::BadAllocationRequest)),
        }
    }
}

impl<T: Copy> Drop for RawArray<T> {
    fn drop(&mut self) {
        if let Some(ptr) = self.ptr.take() {
            if let Ok(layout) = Self::layout(self.capacity) {
                unsafe { dealloc(ptr.as_ptr() as *mut u8, layout) };
                trace!(capacity = self.capacity, "freed array");
            }
        }
    }
}
