use serde::{Deserialize, Serialize};

/// Boolean encoded as `"Y"` / `"N"` in the runtime constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StringBoolean {
    #[serde(rename = "Y")]
    Yes,
    #[serde(rename = "N")]
    No,
}

impl StringBoolean {
    #[must_use]
    pub const fn as_bool(self) -> bool {
        matches!(self, Self::Yes)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Y",
            Self::No => "N",
        }
    }
}

impl From<bool> for StringBoolean {
    fn from(b: bool) -> Self {
        if b { Self::Yes } else { Self::No }
    }
}

/// A flag that arrives either as `"Y"`/`"N"` or as `0`/`1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Text(StringBoolean),
    Number(i64),
}

impl FlagValue {
    /// Truthiness: `"Y"` or any non-zero number.
    #[must_use]
    pub const fn is_set(self) -> bool {
        match self {
            Self::Text(b) => b.as_bool(),
            Self::Number(n) => n != 0,
        }
    }
}
