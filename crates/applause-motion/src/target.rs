use smallvec::SmallVec;

/// Identity of an externally rendered element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetId(pub u64);

/// Opaque reference to an element owned by the renderer, used only as an
/// attachment point for animations. Handles carry string attributes so the
/// element can say which slot it fills.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetHandle {
    id: TargetId,
    attrs: SmallVec<[(String, String); 2]>,
}

impl TargetHandle {
    pub fn new(id: u64) -> Self {
        Self {
            id: TargetId(id),
            attrs: SmallVec::new(),
        }
    }

    /// Sets an attribute, replacing any previous value under the same name.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn id(&self) -> TargetId {
        self.id
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}
