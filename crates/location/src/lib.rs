use derive_more::Display;

#[derive(Debug, Display, PartialEq, Eq, Clone, Copy)]
#[display(fmt = "line {line}")]
pub struct Location {
    pub line: usize,
}

impl Location {
    pub const fn new(line: usize) -> Location {
        Location { line }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self { line: 1 }
    }
}
