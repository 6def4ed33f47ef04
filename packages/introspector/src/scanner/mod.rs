//! Scanner
//!
//! Finds enum declarations in a module and extracts their schema.

pub mod enum_base;
pub mod enum_class;
pub mod enum_decl;
pub mod module;
pub mod options;

pub use enum_base::{EnumBase, EnumBaseValue, EnumRepresentation};
pub use enum_class::{EnumDefinition, EnumValueDefinition};
pub use enum_decl::{EnumDeclDefinition, EnumDeclValue};
pub use module::{scan_module, ModuleEnums};
pub use options::ScannerOptions;
