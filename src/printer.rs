use std::fmt;
use std::io::Write;

use itertools::join;

use crate::error::RuntimeError;
use crate::value::Slot;

/// Trait for containers that can list their slots, one per line
pub trait Print {
    fn print<W: Write>(&self, out: &mut W) -> Result<(), RuntimeError>;
}

/// `Display` wrapper for a slot that may be empty
#[derive(Copy, Clone)]
pub struct SlotDisplay<'a>(pub Slot<'a>);

impl<'a> fmt::Display for SlotDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "Invalid Data"),
        }
    }
}

pub fn print(slot: Slot) -> String {
    format!("{}", SlotDisplay(slot))
}

pub fn debug(slots: &[Slot]) -> String {
    format!("[{}]", join(slots.iter().map(|slot| SlotDisplay(*slot)), ", "))
}

/// Write `Index: i, <slot>` for each slot in order
pub fn print_indexed<W: Write>(slots: &[Slot], out: &mut W) -> Result<(), RuntimeError> {
    for (index, slot) in slots.iter().enumerate() {
        writeln!(out, "Index: {}, {}", index, print(*slot))?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{debug, print, print_indexed};
    use crate::value::Value;

    #[test]
    fn print_missing_slot() {
        assert_eq!(print(None), "Invalid Data");
    }

    #[test]
    fn print_present_slot() {
        let c = Value::Char('q');
        assert_eq!(print(Some(&c)), "Type: CHAR, Value: q");
    }

    #[test]
    fn indexed_lines() {
        let i = Value::Int(1);
        let f = Value::Float(0.25);

        let mut out = Vec::new();
        print_indexed(&[Some(&i), None, Some(&f)], &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Index: 0, Type: INT, Value: 1\n\
             Index: 1, Invalid Data\n\
             Index: 2, Type: FLOAT, Value: 0.25\n"
        );
    }

    #[test]
    fn debug_joins_slots() {
        let i = Value::Int(5);
        assert_eq!(debug(&[Some(&i), None]), "[Type: INT, Value: 5, Invalid Data]");
        assert_eq!(debug(&[]), "[]");
    }
}
