//! Bidirectional enum tables for symbolic request parameters.
//!
//! The platform accepts either a numeric code or an upper-case name for many
//! path and query values. Each table records which of the two its endpoints
//! expect ([`EnumForm`]), so a caller can pass whichever is convenient.

pub mod normalize;

pub use normalize::{join, normalize, resolve, resolve_many};

use crate::error::EnumError;

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

/// The form a table's endpoints expect on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumForm {
    Code,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumTable {
    /// Human-readable name used in error messages, e.g. "quick date".
    pub description: &'static str,
    pub form: EnumForm,
    pub members: &'static [(&'static str, i64)],
}

impl EnumTable {
    pub const fn new(
        description: &'static str,
        form: EnumForm,
        members: &'static [(&'static str, i64)],
    ) -> Self {
        Self {
            description,
            form,
            members,
        }
    }

    pub fn name_of(&self, code: i64) -> Option<&'static str> {
        self.members
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(name, _)| *name)
    }

    /// Case-insensitive name lookup.
    pub fn code_of(&self, name: &str) -> Option<i64> {
        self.members
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, code)| *code)
    }

    pub fn codes(&self) -> impl Iterator<Item = i64> + '_ {
        self.members.iter().map(|(_, code)| *code)
    }

    /// Check that names are upper-case and unique and that codes are unique.
    #[track_caller]
    pub fn validate(&self) -> Result<(), EnumError> {
        let mut names = HashSet::new();
        let mut codes = HashSet::new();

        for (name, code) in self.members {
            if name.is_empty() || name.to_uppercase() != *name {
                return Err(EnumError::invalid_table(
                    self.description,
                    format!("name '{name}' is not upper-case"),
                ));
            }
            if !names.insert(*name) {
                return Err(EnumError::invalid_table(
                    self.description,
                    format!("name '{name}' appears twice"),
                ));
            }
            if !codes.insert(*code) {
                return Err(EnumError::invalid_table(
                    self.description,
                    format!("code {code} appears twice"),
                ));
            }
        }

        Ok(())
    }
}

/// A resolved table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumMember {
    pub name: &'static str,
    pub code: i64,
}

/// The value sent on the wire, in the table's [`EnumForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalValue {
    Code(i64),
    Name(&'static str),
}

impl fmt::Display for CanonicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalValue::Code(code) => write!(f, "{code}"),
            CanonicalValue::Name(name) => f.write_str(name),
        }
    }
}

/// Caller input: a numeric code or a (possibly lower-case) name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumKey<'a> {
    Code(i64),
    Name(Cow<'a, str>),
}

impl fmt::Display for EnumKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumKey::Code(code) => write!(f, "{code}"),
            EnumKey::Name(name) => f.write_str(name),
        }
    }
}

impl<'a> From<&'a str> for EnumKey<'a> {
    fn from(name: &'a str) -> Self {
        EnumKey::Name(Cow::Borrowed(name))
    }
}

impl<'a> From<&'a String> for EnumKey<'a> {
    fn from(name: &'a String) -> Self {
        EnumKey::Name(Cow::Borrowed(name.as_str()))
    }
}

impl From<String> for EnumKey<'_> {
    fn from(name: String) -> Self {
        EnumKey::Name(Cow::Owned(name))
    }
}

impl From<CanonicalValue> for EnumKey<'_> {
    fn from(value: CanonicalValue) -> Self {
        match value {
            CanonicalValue::Code(code) => EnumKey::Code(code),
            CanonicalValue::Name(name) => EnumKey::Name(Cow::Borrowed(name)),
        }
    }
}

macro_rules! enum_key_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for EnumKey<'_> {
                fn from(code: $int) -> Self {
                    EnumKey::Code(i64::from(code))
                }
            }
        )*
    };
}

enum_key_from_int!(i8, i16, i32, i64, u8, u16, u32);
