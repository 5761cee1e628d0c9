use std::fmt;

/// Malformed input rejected before any ring is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The polygon has no rings, so there is no outer boundary.
    EmptyPolygon,
    /// A ring has no points. `ring` is its index in the polygon (0 for the outer ring).
    EmptyRing { ring: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyPolygon => write!(f, "polygon has no outer ring"),
            Error::EmptyRing { ring } => write!(f, "ring {} has no points", ring),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[test]
fn error_display() {
    assert_eq!(Error::EmptyPolygon.to_string(), "polygon has no outer ring");
    assert_eq!(Error::EmptyRing { ring: 2 }.to_string(), "ring 2 has no points");
    let boxed: Box<dyn std::error::Error> = Box::new(Error::EmptyRing { ring: 0 });
    assert_eq!(boxed.to_string(), "ring 0 has no points");
}
