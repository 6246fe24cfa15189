//! Registration options for operations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role an operation plays when it sits in a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Predicate over the threaded value; a falsy result stops evaluation
    Filter,
    /// Transforms the threaded value for every later entry
    Modifying,
    /// Consumes the boolean outcome of the rest of the chain
    Wrapping,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Filter => write!(f, "filter"),
            OperationKind::Modifying => write!(f, "modifying"),
            OperationKind::Wrapping => write!(f, "wrapping"),
        }
    }
}

/// Options recognised by `register`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationOptions {
    /// Can the operation be chained after another one
    pub pipeable: bool,

    /// Will the operation modify the threaded value
    pub modifying: bool,

    /// Will the operation wrap the outcome of the rest of the chain
    pub wrapping: bool,
}

impl OperationOptions {
    /// Plain pipeable filter
    pub fn new() -> Self {
        Self {
            pipeable: true,
            modifying: false,
            wrapping: false,
        }
    }

    pub fn pipeable(mut self, pipeable: bool) -> Self {
        self.pipeable = pipeable;
        self
    }

    pub fn modifying(mut self, modifying: bool) -> Self {
        self.modifying = modifying;
        self
    }

    pub fn wrapping(mut self, wrapping: bool) -> Self {
        self.wrapping = wrapping;
        self
    }

    /// Resolve the operation kind.
    ///
    /// `modifying` takes precedence over `wrapping` when both are set.
    pub fn kind(&self) -> OperationKind {
        if self.modifying {
            OperationKind::Modifying
        } else if self.wrapping {
            OperationKind::Wrapping
        } else {
            OperationKind::Filter
        }
    }

    /// True when both exclusive roles were requested
    pub fn has_conflicting_roles(&self) -> bool {
        self.modifying && self.wrapping
    }
}

impl Default for OperationOptions {
    fn default() -> Self {
        Self::new()
    }
}
