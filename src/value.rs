/// The tagged value type stored by reference in tuples and lists.
///
/// A `Value` is created and owned by the caller. Containers only ever hold a
/// `Slot`, a shared reference whose lifetime ties the container to the values
/// it points at.
use std::fmt;

/// Every kind of value native to tuplist
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ValueKind {
    Int,
    Float,
    Char,
}

impl ValueKind {
    /// The label used when printing a value of this kind
    pub fn label(self) -> &'static str {
        match self {
            ValueKind::Int => "INT",
            ValueKind::Float => "FLOAT",
            ValueKind::Char => "CHAR",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Copy, Clone, Debug)]
pub enum Value {
    Int(i32),
    Float(f32),
    Char(char),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Char(_) => ValueKind::Char,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Type: {}, Value: ", self.kind())?;

        match self {
            Value::Int(i) => write!(f, "{}", i),
            // lowercase, as C's %.2f spells it
            Value::Float(n) if n.is_nan() => write!(f, "nan"),
            Value::Float(n) => write!(f, "{:.2}", n),
            Value::Char(c) => write!(f, "{}", c),
        }
    }
}

/// A container slot: a borrowed value, or nothing at all
pub type Slot<'a> = Option<&'a Value>;
