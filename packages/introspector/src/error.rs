//! Introspection Errors

use thiserror::Error;

/// Failure reported by an [`IntrospectionHost`](crate::host::IntrospectionHost).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The declaration's name is not bound to a symbol.
    #[error("could not resolve symbol of `{name}` at {position}.")]
    UnresolvedSymbol { name: String, position: String },
}

/// An error raised while extracting an enum from a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntrospectionError {
    /// The enum declaration has no name part.
    #[error("could not resolve name of enum at {position}.")]
    UnnamedEnum { position: String },

    /// An enum member has no initializer. Carries no source position.
    #[error("enum value has no literal value")]
    MissingValue,

    #[error(transparent)]
    Host(#[from] HostError),
}

impl IntrospectionError {
    /// Source position embedded in the error, if it has one.
    pub fn position(&self) -> Option<&str> {
        match self {
            IntrospectionError::UnnamedEnum { position } => Some(position.as_str()),
            IntrospectionError::Host(HostError::UnresolvedSymbol { position, .. }) => {
                Some(position.as_str())
            }
            IntrospectionError::MissingValue => None,
        }
    }

    /// Returns `true` when the error points at a location in the source.
    pub fn is_locatable(&self) -> bool {
        self.position().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unnamed_enum_embeds_position() {
        let err = IntrospectionError::UnnamedEnum {
            position: "mod.ts:3:1".to_string(),
        };
        assert_eq!(err.to_string(), "could not resolve name of enum at mod.ts:3:1.");
        assert!(err.is_locatable());
    }

    #[test]
    fn missing_value_is_unlocated() {
        let err = IntrospectionError::MissingValue;
        assert_eq!(err.position(), None);
        assert!(!err.is_locatable());
    }

    #[test]
    fn host_errors_pass_through_unchanged() {
        let host = HostError::UnresolvedSymbol {
            name: "[KEY]".to_string(),
            position: "mod.ts:2:3".to_string(),
        };
        let err: IntrospectionError = host.clone().into();
        assert_eq!(err.to_string(), host.to_string());
        assert_eq!(err, IntrospectionError::Host(host));
    }
}
