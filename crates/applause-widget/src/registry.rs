use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::str::FromStr;

use applause_motion::TargetHandle;

use crate::error::{ClapError, ClapResult};

/// Attribute a rendered element uses to announce which slot it fills.
pub const ROLE_ATTR: &str = "data-refkey";

/// The slots of the widget that animations attach to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClapRole {
    Button,
    CountLabel,
    TotalLabel,
}

impl ClapRole {
    pub const ALL: [ClapRole; 3] = [ClapRole::Button, ClapRole::CountLabel, ClapRole::TotalLabel];

    pub fn key(self) -> &'static str {
        match self {
            ClapRole::Button => "button",
            ClapRole::CountLabel => "count-label",
            ClapRole::TotalLabel => "total-label",
        }
    }

    /// Reads the role a handle declares through [`ROLE_ATTR`].
    pub fn of(handle: &TargetHandle) -> ClapResult<Self> {
        handle
            .attr(ROLE_ATTR)
            .ok_or(ClapError::MissingRoleAttribute(handle.id()))?
            .parse()
    }
}

impl FromStr for ClapRole {
    type Err = ClapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClapRole::ALL
            .into_iter()
            .find(|r| r.key() == s)
            .ok_or_else(|| ClapError::UnknownRole(s.to_string()))
    }
}

impl std::fmt::Display for ClapRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Registration callback handed to the renderer. The same `Rc` is returned
/// for the registry's whole lifetime.
pub type Registrar = Rc<dyn Fn(TargetHandle)>;

type Targets = Rc<RefCell<HashMap<ClapRole, TargetHandle>>>;

/// Role → handle map filled in by the renderer as elements mount.
///
/// Entries are only ever added or overwritten. Clones share the same map.
#[derive(Clone)]
pub struct TargetRegistry {
    targets: Targets,
    registrar: Registrar,
}

impl TargetRegistry {
    pub fn new() -> Self {
        let targets: Targets = Rc::new(RefCell::new(HashMap::new()));
        let registrar: Registrar = {
            let targets = targets.clone();
            Rc::new(move |handle: TargetHandle| match ClapRole::of(&handle) {
                Ok(role) => insert(&targets, role, handle),
                Err(e) => log::warn!("registry: ignoring target {:?}: {e}", handle.id()),
            })
        };
        Self { targets, registrar }
    }

    pub fn registrar(&self) -> Registrar {
        self.registrar.clone()
    }

    /// Registers a handle under the role named by its [`ROLE_ATTR`] attribute.
    /// Handles without a recognizable role are logged and ignored.
    pub fn register_target(&self, handle: TargetHandle) {
        (self.registrar)(handle)
    }

    /// Registers a handle under an explicit role, whatever its attributes say.
    pub fn register(&self, role: ClapRole, handle: TargetHandle) {
        insert(&self.targets, role, handle)
    }

    pub fn get(&self, role: ClapRole) -> Option<TargetHandle> {
        self.targets.borrow().get(&role).cloned()
    }

    pub fn targets(&self) -> ClapTargets {
        ClapTargets {
            button: self.get(ClapRole::Button),
            count: self.get(ClapRole::CountLabel),
            total: self.get(ClapRole::TotalLabel),
        }
    }

    pub fn is_complete(&self) -> bool {
        let targets = self.targets.borrow();
        ClapRole::ALL.iter().all(|r| targets.contains_key(r))
    }
}

impl Default for TargetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn insert(targets: &Targets, role: ClapRole, handle: TargetHandle) {
    let mut targets = targets.borrow_mut();
    if targets.get(&role) == Some(&handle) {
        log::trace!("registry: {role} already registered as {:?}", handle.id());
        return;
    }
    log::debug!("registry: {role} -> {:?}", handle.id());
    targets.insert(role, handle);
}

/// Snapshot of the three animation targets, any of which may still be missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClapTargets {
    pub button: Option<TargetHandle>,
    pub count: Option<TargetHandle>,
    pub total: Option<TargetHandle>,
}

impl ClapTargets {
    /// All three handles, or `None` while any is missing.
    pub fn complete(&self) -> Option<(&TargetHandle, &TargetHandle, &TargetHandle)> {
        Some((self.button.as_ref()?, self.count.as_ref()?, self.total.as_ref()?))
    }
}
