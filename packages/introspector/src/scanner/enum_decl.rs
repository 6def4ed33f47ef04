// Enum Declaration
//
// Extracts an enum from a TypeScript `enum` declaration.

use super::enum_base::{serialize_value, EnumBase, EnumBaseValue};
use crate::error::IntrospectionError;
use crate::host::{Declaration, IntrospectionHost};
use indexmap::IndexMap;
use oxc_ast::ast::{TSEnumDeclaration, TSEnumMember};
use serde::{Serialize, Serializer};

/// One member of a TypeScript `enum`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDeclValue {
    source_name: String,
    value: String,
    description: String,
}

impl EnumDeclValue {
    /// Members without an initializer are rejected like class fields are.
    pub fn extract(
        member: &TSEnumMember<'_>,
        host: &impl IntrospectionHost,
    ) -> Result<Self, IntrospectionError> {
        let binding = host.resolve_binding(Declaration::EnumMember(member))?;
        let description = host.documentation_of(&binding);

        let initializer = member
            .initializer
            .as_ref()
            .ok_or(IntrospectionError::MissingValue)?;

        Ok(Self {
            source_name: binding.name().to_string(),
            value: host.resolve_literal(initializer),
            description,
        })
    }
}

impl EnumBaseValue for EnumDeclValue {
    fn source_name(&self) -> &str {
        &self.source_name
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl Serialize for EnumDeclValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_value(self, "EnumDeclValue", serializer)
    }
}

/// An enum declared with the `enum` keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDeclDefinition {
    name: String,
    description: String,
    values: IndexMap<String, EnumDeclValue>,
}

impl EnumDeclDefinition {
    pub fn extract(
        decl: &TSEnumDeclaration<'_>,
        host: &impl IntrospectionHost,
    ) -> Result<Self, IntrospectionError> {
        let binding = host.resolve_binding(Declaration::Enum(decl))?;
        let description = host.documentation_of(&binding);

        let mut values = IndexMap::new();
        for member in &decl.body.members {
            let value = EnumDeclValue::extract(member, host)?;
            values.insert(value.source_name.clone(), value);
        }

        Ok(Self {
            name: binding.name().to_string(),
            description,
            values,
        })
    }
}

impl EnumBase for EnumDeclDefinition {
    type Value = EnumDeclValue;

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn values(&self) -> &IndexMap<String, EnumDeclValue> {
        &self.values
    }
}
