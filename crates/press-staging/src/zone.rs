use std::fmt;

/// A namespace within the staging store.
///
/// Zones map to sibling directories under the store root and never share
/// a namespace with each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Raw uploads awaiting transformation.
    Incoming,
    /// Transformed artifacts awaiting download.
    Outgoing,
}

impl Zone {
    /// Directory name for this zone under the store root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Zone::Incoming => "incoming",
            Zone::Outgoing => "outgoing",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
