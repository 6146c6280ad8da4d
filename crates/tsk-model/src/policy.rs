//! Interface ownership policies.
//!
//! An interface declaration is "foreign" when it reopens a type owned by a
//! different logical unit, typically a `lib.d.ts` type such as `Window`
//! augmented by user code. Foreign interfaces are translated as extension
//! members instead of new classifiers.

use crate::source::InterfaceDeclaration;
use rustc_hash::FxHashSet;

pub trait OwnershipPolicy {
    /// `true` when this run owns the interface and should emit a classifier.
    fn is_own_declaration(&self, interface: &InterfaceDeclaration) -> bool;
}

/// Every interface belongs to the current run.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllOwned;

impl OwnershipPolicy for AllOwned {
    fn is_own_declaration(&self, _interface: &InterfaceDeclaration) -> bool {
        true
    }
}

/// Interfaces whose names appear in the set belong to another unit.
#[derive(Clone, Debug, Default)]
pub struct ForeignInterfaces {
    names: FxHashSet<String>,
}

impl ForeignInterfaces {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl OwnershipPolicy for ForeignInterfaces {
    fn is_own_declaration(&self, interface: &InterfaceDeclaration) -> bool {
        !self.names.contains(&interface.name)
    }
}

impl<F> OwnershipPolicy for F
where
    F: Fn(&InterfaceDeclaration) -> bool,
{
    fn is_own_declaration(&self, interface: &InterfaceDeclaration) -> bool {
        self(interface)
    }
}
