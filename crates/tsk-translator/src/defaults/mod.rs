//! Stock collaborators: TypeScript-to-Kotlin type mapping, overload
//! extraction and member translation.

pub mod members;
pub mod signatures;
pub mod type_mapper;

pub use members::DefaultMemberTranslator;
pub use signatures::DefaultSignatureExtractor;
pub use type_mapper::DefaultTypeMapper;
