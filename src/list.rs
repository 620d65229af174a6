/// List is an Array type that can refer to any kind of value
use std::io::Write;

use crate::array::Array;
use crate::containers::Container;
use crate::error::RuntimeError;
use crate::printer::{print_indexed, Print};
use crate::value::Slot;

/// A List holds a growable, mixed sequence of value references
pub type List<'a> = Array<Slot<'a>>;

impl<'a> Print for List<'a> {
    fn print<W: Write>(&self, out: &mut W) -> Result<(), RuntimeError> {
        print_indexed(self.as_slice(), out)
    }
}
