//! JSON paths for error messages (`$.order.items[2]`).

use std::fmt;

use smallvec::SmallVec;

/// One step into a JSON document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// Location of the value being hydrated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonPath {
    segments: SmallVec<[Segment; 8]>,
}

impl JsonPath {
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    /// Number of steps below the root
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            match segment {
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
