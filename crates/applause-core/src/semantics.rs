/// High‑level semantic role of a view, similar to ARIA roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Text,
    Button,
    /// A read-only value within a known range (`aria-valuenow` and friends).
    Meter,
}

/// Current value of a ranged element together with its bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeValue {
    pub now: u32,
    pub min: u32,
    pub max: u32,
}

/// Semantics attached to a view, used to build the accessibility tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Semantics {
    pub role: Role,
    /// Human‑readable label for screen readers.
    pub label: Option<String>,
    /// Toggle state for buttons that stay engaged once used (`aria-pressed`).
    pub pressed: Option<bool>,
    pub range: Option<RangeValue>,
}

impl Semantics {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            label: None,
            pressed: None,
            range: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = Some(pressed);
        self
    }

    pub fn range(mut self, now: u32, min: u32, max: u32) -> Self {
        self.range = Some(RangeValue { now, min, max });
        self
    }
}
