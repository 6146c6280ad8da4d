//! Centralized limits for the declaration translator.
//!
//! These bound recursion and combinatorial expansion so that pathological
//! inputs degrade into diagnostics instead of stack overflows.

/// Maximum nesting depth of module/namespace declarations.
///
/// Each nested `namespace` adds a child translator frame. Past this depth the
/// module is reported as unsupported and skipped.
///
/// ```typescript
/// declare namespace a { namespace b { namespace c { /* ... 128 levels ... */ } } }
/// ```
pub const MAX_MODULE_NESTING_DEPTH: u32 = 128;

/// Default cap on overloads generated from union-typed parameters.
///
/// `f(a: A | B, b: C | D | E)` expands to 6 overloads; when the product
/// exceeds this value the unions are mapped as a whole instead.
pub const DEFAULT_MAX_OVERLOAD_EXPANSION: usize = 16;

/// Maximum nesting depth of anonymous object types inside one another.
///
/// ```typescript
/// declare var x: { a: { b: { c: { /* ... */ } } } };
/// ```
pub const MAX_STRUCTURAL_TYPE_DEPTH: u32 = 64;
