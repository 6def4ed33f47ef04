// Enum Class
//
// Extracts an enum from a class whose property declarations carry the values:
//
//   /** a color */
//   @enumType()
//   export class Color {
//     /** r */
//     static readonly RED = "RED"
//   }

use super::enum_base::{serialize_value, EnumBase, EnumBaseValue};
use crate::error::IntrospectionError;
use crate::host::{Declaration, IntrospectionHost};
use indexmap::IndexMap;
use oxc_ast::ast::{Class, ClassElement, PropertyDefinition};
use serde::{Serialize, Serializer};

/// One value of a class based enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValueDefinition {
    source_name: String,
    literal_value: String,
    description: String,
}

impl EnumValueDefinition {
    /// Extract the value declared by `property`.
    ///
    /// Fails if the property name is unbound or it has no initializer.
    pub fn extract(
        property: &PropertyDefinition<'_>,
        host: &impl IntrospectionHost,
    ) -> Result<Self, IntrospectionError> {
        let binding = host.resolve_binding(Declaration::Property(property))?;
        let description = host.documentation_of(&binding);

        let initializer = property
            .value
            .as_ref()
            .ok_or(IntrospectionError::MissingValue)?;

        Ok(Self {
            source_name: binding.name().to_string(),
            literal_value: host.resolve_literal(initializer),
            description,
        })
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn literal_value(&self) -> &str {
        &self.literal_value
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl EnumBaseValue for EnumValueDefinition {
    fn source_name(&self) -> &str {
        &self.source_name
    }

    fn value(&self) -> &str {
        &self.literal_value
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl Serialize for EnumValueDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_value(self, "EnumValueDefinition", serializer)
    }
}

/// An enum declared as a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDefinition {
    name: String,
    description: String,
    values: IndexMap<String, EnumValueDefinition>,
}

impl EnumDefinition {
    /// Extract an enum from `class`.
    ///
    /// Every property declaration becomes a value keyed by its name, later declarations
    /// replacing earlier ones with the same name. Other members are ignored. Any failing
    /// property fails the whole extraction.
    pub fn extract(
        class: &Class<'_>,
        host: &impl IntrospectionHost,
    ) -> Result<Self, IntrospectionError> {
        if class.id.is_none() {
            return Err(IntrospectionError::UnnamedEnum {
                position: host.position_of(class.span),
            });
        }

        let binding = host.resolve_binding(Declaration::Class(class))?;
        let description = host.documentation_of(&binding);

        let mut values = IndexMap::new();
        for element in &class.body.body {
            if let ClassElement::PropertyDefinition(property) = element {
                let value = EnumValueDefinition::extract(property, host)?;
                values.insert(value.source_name.clone(), value);
            }
        }

        Ok(Self {
            name: binding.name().to_string(),
            description,
            values,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl EnumBase for EnumDefinition {
    type Value = EnumValueDefinition;

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn values(&self) -> &IndexMap<String, EnumValueDefinition> {
        &self.values
    }
}
