use crate::policy::{AllOwned, ForeignInterfaces, OwnershipPolicy};
use crate::source::InterfaceDeclaration;
use crate::symbols::{SymbolResolver, SymbolTable};
use tsk_common::NodeId;

fn interface(name: &str) -> InterfaceDeclaration {
    InterfaceDeclaration {
        id: NodeId(0),
        modifiers: Default::default(),
        name: name.to_string(),
        type_parameters: vec![],
        extends: vec![],
        members: vec![],
    }
}

#[test]
fn test_unbound_node_has_no_symbol() {
    let table = SymbolTable::new();
    assert!(table.is_empty());
    assert_eq!(table.resolve_canonical_symbol(NodeId(42)), None);
}

#[test]
fn test_two_sites_share_one_symbol() {
    let mut table = SymbolTable::new();
    let ns = table.bind_fresh(NodeId(1));
    table.bind(NodeId(2), ns);

    assert_eq!(table.resolve_canonical_symbol(NodeId(1)), Some(ns));
    assert_eq!(table.resolve_canonical_symbol(NodeId(2)), Some(ns));
}

#[test]
fn test_alias_chain_collapses_to_target() {
    let mut table = SymbolTable::new();
    let original = table.bind_fresh(NodeId(1));
    let reexport = table.bind_fresh(NodeId(2));
    let reexport_of_reexport = table.bind_fresh(NodeId(3));
    table.alias(reexport, original);
    table.alias(reexport_of_reexport, reexport);

    assert_eq!(table.resolve_canonical_symbol(NodeId(3)), Some(original));
    assert_eq!(table.canonical(reexport), original);
}

#[test]
fn test_alias_cycle_terminates() {
    let mut table = SymbolTable::new();
    let a = table.bind_fresh(NodeId(1));
    let b = table.bind_fresh(NodeId(2));
    table.alias(a, b);
    table.alias(b, a);

    // Either member of the cycle is acceptable; the call must return.
    let resolved = table.resolve_canonical_symbol(NodeId(1)).expect("bound");
    assert!(resolved == a || resolved == b);
}

#[test]
fn test_self_alias_is_ignored() {
    let mut table = SymbolTable::new();
    let a = table.bind_fresh(NodeId(1));
    table.alias(a, a);
    assert_eq!(table.canonical(a), a);
}

#[test]
fn test_ownership_policies() {
    assert!(AllOwned.is_own_declaration(&interface("Window")));

    let foreign = ForeignInterfaces::new(["Window", "Document"]);
    assert!(!foreign.is_own_declaration(&interface("Window")));
    assert!(foreign.is_own_declaration(&interface("Widget")));

    let by_prefix = |iface: &InterfaceDeclaration| !iface.name.starts_with("Lib");
    assert!(!by_prefix.is_own_declaration(&interface("LibThing")));
    assert!(by_prefix.is_own_declaration(&interface("Thing")));
}
