//! Payload validation shared by all entities.
//!
//! Entities are built from loosely typed JSON payloads. Validation runs in two
//! passes: every required field must be present before any field's type is
//! inspected, so a payload that is both incomplete and mistyped always reports
//! the missing property.

use std::fmt;

use serde_json::{Map, Value};

/// Identifies which entity rejected a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    AddThread,
    AddedThread,
    GetThread,
    AddComment,
    AddedComment,
    GetComment,
}

impl EntityKind {
    /// Error code prefix used in entity error messages.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AddThread => "ADD_THREAD",
            Self::AddedThread => "ADDED_THREAD",
            Self::GetThread => "GET_THREAD",
            Self::AddComment => "ADD_COMMENT",
            Self::AddedComment => "ADDED_COMMENT",
            Self::GetComment => "GET_COMMENT",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Construction failure of a domain entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EntityError {
    #[error("{0}.NOT_CONTAIN_NEEDED_PROPERTY")]
    NotContainNeededProperty(EntityKind),

    #[error("{0}.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    NotMeetDataTypeSpecification(EntityKind),

    #[error("{0}.TITLE_LIMIT_CHAR")]
    TitleLimitChar(EntityKind),
}

impl EntityError {
    /// The entity that raised this error.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::NotContainNeededProperty(kind)
            | Self::NotMeetDataTypeSpecification(kind)
            | Self::TitleLimitChar(kind) => *kind,
        }
    }
}

/// Declared type of a payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldType {
    Text,
    Flag,
    List,
}

impl FieldType {
    fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Text => value.is_string(),
            Self::Flag => value.is_boolean(),
            Self::List => value.is_array(),
        }
    }
}

/// A payload that passed presence and type checks.
pub(crate) struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Check `payload` against the declared field list of `kind`.
    pub(crate) fn read(
        kind: EntityKind,
        payload: &'a Value,
        declared: &[(&str, FieldType)],
    ) -> Result<Self, EntityError> {
        let map = payload
            .as_object()
            .ok_or(EntityError::NotContainNeededProperty(kind))?;

        if declared.iter().any(|(name, _)| is_absent(map.get(*name))) {
            return Err(EntityError::NotContainNeededProperty(kind));
        }

        let mistyped = declared
            .iter()
            .any(|(name, ty)| map.get(*name).map_or(true, |value| !ty.matches(value)));
        if mistyped {
            return Err(EntityError::NotMeetDataTypeSpecification(kind));
        }

        Ok(Self { map })
    }

    pub(crate) fn text(&self, name: &str) -> String {
        self.map
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned()
    }

    pub(crate) fn flag(&self, name: &str) -> bool {
        self.map.get(name).and_then(Value::as_bool).unwrap_or(false)
    }

    pub(crate) fn list(&self, name: &str) -> &'a [Value] {
        self.map
            .get(name)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

// Empty strings count as missing, `false` does not.
fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}
