/// Basic growable array type:
///
///  Array<T>
///  List<'a> = Array<Slot<'a>>
use std::ptr::write;
use std::slice::from_raw_parts;

use tracing::debug;

use crate::containers::{Container, ContainerFromSlice, StackContainer};
use crate::error::{AllocSite, ErrorKind, RuntimeError};
use crate::rawarray::{default_array_growth, ArraySize, RawArray, DEFAULT_ARRAY_SIZE};

/// An array, like Vec, but with an observable doubling growth policy.
pub struct Array<T: Copy> {
    length: ArraySize,
    data: RawArray<T>,
}

/// Internal implementation
impl<T: Copy> Array<T> {
    /// Allocate a new, empty instance with the default capacity
    pub fn new() -> Result<Array<T>, RuntimeError> {
        Array::with_capacity(DEFAULT_ARRAY_SIZE)
    }

    /// Allocate a new, empty instance with pre-allocated capacity
    pub fn with_capacity(capacity: ArraySize) -> Result<Array<T>, RuntimeError> {
        Ok(Array {
            length: 0,
            data: RawArray::with_capacity(capacity, AllocSite::ListBuffer)?,
        })
    }

    /// Count of objects the array can hold before it must grow
    pub fn capacity(&self) -> ArraySize {
        self.data.capacity()
    }

    /// Free the slot buffer, then the array itself
    pub fn release(self) {
        debug!(
            length = self.length,
            capacity = self.capacity(),
            "releasing array"
        );
        drop(self)
    }

    /// Write into the slot at `length`, which must already be allocated
    fn write_next(&mut self, item: T) -> Result<(), RuntimeError> {
        if self.length >= self.capacity() {
            return Err(RuntimeError::new(ErrorKind::BadAllocationRequest));
        }

        let ptr = self
            .data
            .as_ptr()
            .ok_or(RuntimeError::new(ErrorKind::BadAllocationRequest))?;

        unsafe { write(ptr.add(self.length as usize), item) };
        self.length += 1;
        Ok(())
    }
}

impl<T: Copy> Container<T> for Array<T> {
    fn length(&self) -> ArraySize {
        self.length
    }

    fn as_slice(&self) -> &[T] {
        match self.data.as_ptr() {
            Some(ptr) => unsafe { from_raw_parts(ptr, self.length as usize) },
            None => &[],
        }
    }
}

impl<T: Copy> StackContainer<T> for Array<T> {
    /// Double the capacity when full, then store the item at the end
    fn push(&mut self, item: T) -> Result<(), RuntimeError> {
        let capacity = self.capacity();

        if self.length == capacity {
            let new_capacity = default_array_growth(capacity)?;
            self.data.resize(new_capacity, AllocSite::ListGrowth)?;
            debug!(capacity, new_capacity, "array grew");
        }

        self.write_next(item)
    }
}

impl<T: Copy> ContainerFromSlice<T> for Array<T> {
    /// Always a new array, filled by pushing each item in turn
    fn from_slice(data: &[T]) -> Result<Array<T>, RuntimeError> {
        let mut array = Array::new()?;

        for item in data {
            array.push(*item)?;
        }

        Ok(array)
    }
}

#[cfg(test)]
mod test {
    use super::Array;
    use crate::containers::{Container, ContainerFromSlice, StackContainer};

    #[test]
    fn new_array_has_default_capacity() {
        let array: Array<i64> = Array::new().unwrap();
        assert!(array.length() == 0);
        assert!(array.capacity() == 2);
        assert!(array.as_slice().is_empty());
        array.release();
    }

    #[test]
    fn capacity_doubles_on_demand() {
        let expected = [(1, 2), (2, 2), (3, 4), (4, 4), (5, 8), (8, 8), (9, 16), (17, 32)];

        for &(count, capacity) in expected.iter() {
            let mut array: Array<i64> = Array::new().unwrap();
            for i in 0..count {
                array.push(i as i64).unwrap();
            }

            assert!(array.length() == count);
            assert!(array.capacity() == capacity);
        }
    }

    #[test]
    fn array_generic_push() {
        let mut array: Array<i64> = Array::new().unwrap();

        for i in 0..1000 {
            array.push(i).unwrap();
        }

        assert!(array.length() == 1000);
        assert!(array.capacity() == 1024);

        for (i, item) in array.as_slice().iter().enumerate() {
            assert!(*item == i as i64);
        }
    }

    #[test]
    fn array_with_capacity_and_realloc() {
        let mut array: Array<u32> = Array::with_capacity(256).unwrap();

        let ptr_before = array.data.as_ptr();

        // fill to capacity
        for i in 0..256 {
            array.push(i).unwrap();
        }

        // array storage shouldn't have been reallocated
        assert!(ptr_before == array.data.as_ptr());
        assert!(array.capacity() == 256);

        // overflow capacity, requiring reallocation
        array.push(256).unwrap();
        assert!(array.capacity() == 512);
        assert!(array.as_slice()[0] == 0);
        assert!(array.as_slice()[256] == 256);
    }

    #[test]
    fn zero_capacity_array_grows_to_default() {
        let mut array: Array<u8> = Array::with_capacity(0).unwrap();
        array.push(1).unwrap();
        assert!(array.capacity() == 2);
    }

    #[test]
    fn from_slice_is_fresh() {
        let first: Array<u8> = Array::from_slice(&[1, 2, 3]).unwrap();
        let second: Array<u8> = Array::from_slice(&[4, 5, 6]).unwrap();

        assert!(first.as_slice() == [1, 2, 3]);
        assert!(second.as_slice() == [4, 5, 6]);
        assert!(first.data.as_ptr() != second.data.as_ptr());
        assert!(first.capacity() == 4);
    }
}
