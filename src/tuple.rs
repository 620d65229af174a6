/// A named, fixed-length sequence of slots, filled once at construction
use std::io::Write;
use std::ptr::copy_nonoverlapping;
use std::slice::from_raw_parts;

use tracing::debug;

use crate::containers::Container;
use crate::error::{AllocSite, RuntimeError};
use crate::printer::{print_indexed, Print};
use crate::rawarray::{array_size, ArraySize, RawArray};
use crate::value::Slot;

pub struct Tuple<T: Copy> {
    name: String,
    length: ArraySize,
    data: RawArray<T>,
}

impl<T: Copy> Tuple<T> {
    /// Allocate exactly enough slots for `elements` and copy them in
    pub fn new(name: &str, elements: &[T]) -> Result<Tuple<T>, RuntimeError> {
        let length = array_size(elements.len())?;
        let data = RawArray::with_capacity(length, AllocSite::TupleBuffer)?;

        if let Some(ptr) = data.as_ptr() {
            unsafe { copy_nonoverlapping(elements.as_ptr(), ptr, elements.len()) };
        }

        debug!(name, length, "built tuple");

        Ok(Tuple {
            name: String::from(name),
            length,
            data,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free the slot buffer, then the tuple itself
    pub fn release(self) {
        debug!(name = self.name(), "releasing tuple");
        drop(self)
    }
}

impl<T: Copy> Container<T> for Tuple<T> {
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

/// A tuple of value references
pub type ValueTuple<'a> = Tuple<Slot<'a>>;

impl<'a> Print for ValueTuple<'a> {
    fn print<W: Write>(&self, out: &mut W) -> Result<(), RuntimeError> {
        print_indexed(self.as_slice(), out)
    }
}

#[cfg(test)]
mod test {
    use super::{Tuple, ValueTuple};
    use crate::containers::Container;
    use crate::printer::Print;
    use crate::value::Value;

    #[test]
    fn tuple_copies_references() {
        let a = Value::Int(1);
        let b = Value::Char('b');

        let elements = [Some(&a), None, Some(&b)];
        let tuple = ValueTuple::new("t", &elements).unwrap();

        assert!(tuple.name() == "t");
        assert!(tuple.length() == 3);

        let slice = tuple.as_slice();
        assert!(std::ptr::eq(slice[0].unwrap(), &a));
        assert!(slice[1].is_none());
        assert!(std::ptr::eq(slice[2].unwrap(), &b));

        tuple.release();
    }

    #[test]
    fn empty_tuple() {
        let tuple = ValueTuple::new("empty", &[]).unwrap();
        assert!(tuple.length() == 0);
        assert!(tuple.as_slice().is_empty());

        let mut out = Vec::new();
        tuple.print(&mut out).unwrap();
        assert!(out.is_empty());

        tuple.release();
    }

    #[test]
    fn tuple_prints_in_order() {
        let values: Vec<Value> = (0..5).map(Value::Int).collect();
        let elements: Vec<_> = values.iter().map(Some).collect();
        let tuple = ValueTuple::new("ints", &elements).unwrap();

        let mut out = Vec::new();
        tuple.print(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.len() == 5);
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(*line, format!("Index: {}, Type: INT, Value: {}", i, i));
        }

        // printing again gives the same result and leaves the tuple alone
        let mut again = Vec::new();
        tuple.print(&mut again).unwrap();
        assert_eq!(String::from_utf8(again).unwrap(), text);
        assert!(tuple.length() == 5);
    }

    #[test]
    fn generic_tuple() {
        let tuple: Tuple<u16> = Tuple::new("shorts", &[7, 8, 9]).unwrap();
        assert!(tuple.as_slice() == [7, 8, 9]);
    }
}
