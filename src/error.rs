use std::error::Error;
use std::fmt;
use std::io;

/// Where an allocation was attempted
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AllocSite {
    /// The fixed slot buffer of a tuple
    TupleBuffer,
    /// The initial slot buffer of a list
    ListBuffer,
    /// Reallocation of a list buffer when it grows
    ListGrowth,
}

impl fmt::Display for AllocSite {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AllocSite::TupleBuffer => write!(f, "tuple elements"),
            AllocSite::ListBuffer => write!(f, "list elements"),
            AllocSite::ListGrowth => write!(f, "list resize"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    IOError(String),
    BrokenPipe,
    BadAllocationRequest,
    OutOfMemory(AllocSite),
}

/// A tuplist runtime error type
#[derive(Debug, PartialEq)]
pub struct RuntimeError {
    kind: ErrorKind,
}

impl RuntimeError {
    pub fn new(kind: ErrorKind) -> RuntimeError {
        RuntimeError { kind }
    }

    pub fn error_kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Both the allocator refusing memory and a request too large to express count as
    /// allocation failure. Neither is recoverable.
    pub fn is_allocation_failure(&self) -> bool {
        match self.kind {
            ErrorKind::BadAllocationRequest | ErrorKind::OutOfMemory(_) => true,
            ErrorKind::IOError(_) | ErrorKind::BrokenPipe => false,
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::IOError(ref reason) => write!(f, "IO Error: {}", reason),
            ErrorKind::BrokenPipe => write!(f, "Output closed"),
            ErrorKind::BadAllocationRequest => {
                write!(f, "An invalid memory size allocation was requested!")
            }
            ErrorKind::OutOfMemory(site) => {
                write!(f, "Out of memory while allocating {}!", site)
            }
        }
    }
}

/// Convert from io::Error
impl From<io::Error> for RuntimeError {
    fn from(other: io::Error) -> RuntimeError {
        match other.kind() {
            io::ErrorKind::BrokenPipe => RuntimeError::new(ErrorKind::BrokenPipe),
            _ => RuntimeError::new(ErrorKind::IOError(format!("{}", other))),
        }
    }
}

impl Error for RuntimeError {}

/// Convenience shorthand function for building an out of memory error
pub fn err_oom(site: AllocSite) -> RuntimeError {
    RuntimeError::new(ErrorKind::OutOfMemory(site))
}
