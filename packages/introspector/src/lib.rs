#![deny(clippy::all)]

/*!
 * TypeScript Introspector
 *
 * Extracts enumeration schemas from TypeScript modules for code generation
 */
pub mod error;
pub mod host;
pub mod scanner;

pub use error::{HostError, IntrospectionError};
pub use host::{Binding, Declaration, IntrospectionHost, OxcIntrospectionHost};
pub use scanner::{
    scan_module, EnumBase, EnumBaseValue, EnumDeclDefinition, EnumDeclValue, EnumDefinition,
    EnumRepresentation, EnumValueDefinition, ModuleEnums, ScannerOptions,
};

/// Introspector version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
