//! Name-shaped accessors: `getMyField`, `hasMyField`, `isActive`.
//!
//! Lets callers that only know a field by an accessor-style name read it
//! without one method per field.

use crate::record::Record;
use crate::schema::naming::lcfirst;
use crate::value::Value;

/// A parsed accessor call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessor {
    /// `get<Name>`
    Get(String),
    /// `has<Name>`
    Has(String),
    /// `is<Name>`
    Is(String),
}

impl Accessor {
    /// Parse `getMyField` into `Get("myField")`.
    ///
    /// The verb is everything before the first uppercase letter. Returns
    /// `None` for unknown verbs and for names without an uppercase letter.
    #[must_use]
    pub fn parse(call: &str) -> Option<Self> {
        let split = call.find(|c: char| c.is_ascii_uppercase())?;
        let (verb, name) = call.split_at(split);
        let name = lcfirst(name);
        match verb {
            "get" => Some(Self::Get(name)),
            "has" => Some(Self::Has(name)),
            "is" => Some(Self::Is(name)),
            _ => None,
        }
    }

    /// The field name the accessor targets
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Get(name) | Self::Has(name) | Self::Is(name) => name,
        }
    }
}

/// Result of dispatching an accessor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Access<'a> {
    Value(Option<&'a Value>),
    Flag(bool),
}

impl<'a> Access<'a> {
    /// The value of a `get` access
    #[must_use]
    pub const fn value(self) -> Option<&'a Value> {
        match self {
            Self::Value(value) => value,
            Self::Flag(_) => None,
        }
    }

    /// The flag of a `has`/`is` access; a `get` access reads as truthiness
    #[must_use]
    pub fn flag(self) -> bool {
        match self {
            Self::Value(value) => value.is_some_and(Value::is_truthy),
            Self::Flag(flag) => flag,
        }
    }
}

impl Record {
    /// Run a parsed accessor against this record
    #[must_use]
    pub fn dispatch(&self, accessor: &Accessor) -> Access<'_> {
        match accessor {
            Accessor::Get(name) => Access::Value(self.get(name)),
            Accessor::Has(name) | Accessor::Is(name) => Access::Flag(self.has(name)),
        }
    }

    /// Parse and run an accessor call such as `"getFirstName"`
    #[must_use]
    pub fn call(&self, call: &str) -> Option<Access<'_>> {
        Accessor::parse(call).map(|accessor| self.dispatch(&accessor))
    }
}
