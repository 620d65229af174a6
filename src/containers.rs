/// Container traits
use crate::error::RuntimeError;
use crate::rawarray::ArraySize;

/// Base container-type trait. All container types are subtypes of `Container`.
///
/// Containers own their slot buffer but not what the slots refer to.
pub trait Container<T: Copy>: Sized {
    /// Count of items in the container
    fn length(&self) -> ArraySize;

    /// The initialized slots, `[0, length)`, for a linear scan
    fn as_slice(&self) -> &[T];
}

/// Generic stack trait. If implemented, items can be appended to the container
pub trait StackContainer<T: Copy>: Container<T> {
    /// Push can trigger an underlying array resize, hence it may fail to allocate
    fn push(&mut self, item: T) -> Result<(), RuntimeError>;
}

/// Build a new container holding a copy of the values in the slice
pub trait ContainerFromSlice<T: Copy>: Container<T> {
    fn from_slice(data: &[T]) -> Result<Self, RuntimeError>;
}
