// Enum Base
//
// Capabilities shared by every enum representation found in a module.

use super::{EnumDeclDefinition, EnumDefinition};
use indexmap::IndexMap;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// A single named enum value.
pub trait EnumBaseValue {
    /// Identifier text of the member declaring the value.
    fn source_name(&self) -> &str;
    /// Resolved literal value.
    fn value(&self) -> &str;
    fn description(&self) -> &str;
}

/// An enum with a name, documentation and a bag of values keyed by member name.
pub trait EnumBase {
    type Value: EnumBaseValue;

    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn values(&self) -> &IndexMap<String, Self::Value>;
}

/// Any enum representation the scanner knows how to extract.
///
/// Serializes exactly like the wrapped definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EnumRepresentation {
    /// A class whose fields are the enum values.
    Class(EnumDefinition),
    /// A TypeScript `enum` declaration.
    Declaration(EnumDeclDefinition),
}

impl EnumRepresentation {
    pub fn name(&self) -> &str {
        match self {
            EnumRepresentation::Class(def) => def.name(),
            EnumRepresentation::Declaration(def) => def.name(),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            EnumRepresentation::Class(def) => def.description(),
            EnumRepresentation::Declaration(def) => def.description(),
        }
    }

    /// Values in declaration order.
    pub fn values(&self) -> Vec<&dyn EnumBaseValue> {
        match self {
            EnumRepresentation::Class(def) => def
                .values()
                .values()
                .map(|v| v as &dyn EnumBaseValue)
                .collect(),
            EnumRepresentation::Declaration(def) => def
                .values()
                .values()
                .map(|v| v as &dyn EnumBaseValue)
                .collect(),
        }
    }
}

impl From<EnumDefinition> for EnumRepresentation {
    fn from(def: EnumDefinition) -> Self {
        EnumRepresentation::Class(def)
    }
}

impl From<EnumDeclDefinition> for EnumRepresentation {
    fn from(def: EnumDeclDefinition) -> Self {
        EnumRepresentation::Declaration(def)
    }
}

/// Serialize a value as `{ "name": <value>, "description": <description> }`.
///
/// The `name` key holds the literal value, not the member identifier. Schema consumers
/// read it that way, so the asymmetry is kept on purpose.
pub(crate) fn serialize_value<S: Serializer>(
    value: &impl EnumBaseValue,
    type_name: &'static str,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct(type_name, 2)?;
    state.serialize_field("name", value.value())?;
    state.serialize_field("description", value.description())?;
    state.end()
}
