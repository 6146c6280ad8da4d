//! Structural signature cache.
//!
//! Anonymous object types are keyed by a canonical string built from their
//! translated member list. Two shapes that differ only in member order or in
//! parameter names produce the same key, and therefore the same synthesized
//! type.
//!
//! ```typescript
//! declare function f(a: { x: number; g(cb: string): void }): void;
//! declare function h(b: { g(other: string): void; x: number }): void;
//! // both parameters get the same synthesized type
//! ```

use crate::defaults::members::indexer_members;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::fmt::Write;
use tsk_model::target::{
    Annotation, CallSignature, TargetDeclaration, TargetParameter, TargetType,
};

/// Canonical signature of a member list.
///
/// Each member is serialized on its own with parameter names erased (only
/// parameter types, positions and optional/vararg markers remain), the
/// per-member strings are sorted, then joined. Overloads of one function
/// serialize as separate members, so overload order does not matter either.
pub fn signature_key(members: &[TargetDeclaration]) -> String {
    let mut parts = Vec::with_capacity(members.len());
    for member in members {
        write_member(member, &mut parts);
    }
    parts.sort_unstable();
    parts.join(";")
}

fn write_member(member: &TargetDeclaration, parts: &mut Vec<String>) {
    match member {
        TargetDeclaration::Variable(var) => {
            let mut out = String::new();
            write_annotations(&var.annotations, &mut out);
            out.push_str(if var.mutable { "var " } else { "val " });
            if let Some(receiver) = &var.receiver {
                let _ = write!(out, "{receiver}.");
            }
            let _ = write!(out, "{}: {}", var.name, var.ty);
            parts.push(out);
        }
        TargetDeclaration::Function(func) => {
            for signature in &func.signatures {
                let mut out = String::new();
                write_annotations(&func.annotations, &mut out);
                out.push_str("fun ");
                if let Some(receiver) = &func.receiver {
                    let _ = write!(out, "{receiver}.");
                }
                out.push_str(&func.name);
                write_signature(signature, &mut out);
                parts.push(out);
            }
        }
        TargetDeclaration::Classifier(class) => {
            let mut out = String::new();
            write_annotations(&class.annotations, &mut out);
            let _ = write!(out, "{} {}", class.kind.name(), class.name);
            let mut nested = Vec::new();
            for member in &class.members {
                write_member(member, &mut nested);
            }
            nested.sort_unstable();
            let _ = write!(out, " {{{}}}", nested.join(";"));
            parts.push(out);
        }
        TargetDeclaration::EnumEntry(entry) => {
            let mut out = format!("entry {}", entry.name);
            if let Some(value) = &entry.value {
                let _ = write!(out, " = {value}");
            }
            parts.push(out);
        }
    }
}

fn write_annotations(annotations: &[Annotation], out: &mut String) {
    for annotation in annotations {
        let _ = write!(out, "@{} ", annotation.name());
    }
}

fn write_signature(signature: &CallSignature, out: &mut String) {
    if !signature.type_parameters.is_empty() {
        out.push('<');
        for (i, tp) in signature.type_parameters.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&tp.name);
            if let Some(bound) = &tp.upper_bound {
                let _ = write!(out, " : {bound}");
            }
        }
        out.push('>');
    }
    out.push('(');
    for (i, param) in signature.parameters.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_parameter(param, out);
    }
    let _ = write!(out, "): {}", signature.return_type);
}

/// Parameter name intentionally omitted.
fn write_parameter(param: &TargetParameter, out: &mut String) {
    if param.vararg {
        out.push_str("vararg ");
    }
    let _ = write!(out, "{}", param.ty);
    if param.optional {
        out.push_str(" = definedExternally");
    }
}

/// Signature -> synthesized type reference, for one run.
#[derive(Clone, Debug)]
pub struct SignatureCache {
    entries: IndexMap<String, TargetType, FxBuildHasher>,
}

impl SignatureCache {
    /// A cache pre-seeded with the shapes that map to built-in types:
    /// `{}` -> `Any` and `{ [key: string]: any }` -> `Json`.
    pub fn new() -> Self {
        let mut entries = IndexMap::with_hasher(FxBuildHasher);
        entries.insert(signature_key(&[]), TargetType::any());
        entries.insert(
            signature_key(&indexer_members(
                TargetType::string(),
                TargetType::nullable_any(),
                false,
            )),
            TargetType::json(),
        );
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&TargetType> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: String, reference: TargetType) {
        self.entries.insert(key, reference);
    }

    /// Forget every entry inserted after the first `len`.
    pub fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }

    /// Entries in insertion order, seeds first.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &TargetType)> {
        self.entries.iter().map(|(key, ty)| (key.as_str(), ty))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SignatureCache {
    fn default() -> Self {
        Self::new()
    }
}
