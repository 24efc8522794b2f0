use crate::error::{Error, Result};
use seagrass_layered::HierarchicalOptions;
use seagrass_organic::OrganicOptions;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    Hierarchical,
    Organic,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 2] = [LayoutKind::Hierarchical, LayoutKind::Organic];

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutKind::Hierarchical => "hierarchical",
            LayoutKind::Organic => "organic",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutKind {
    type Err = Error;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        LayoutKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| Error::UnknownLayout {
                kind: s.to_string(),
            })
    }
}

/// A selected layout kind together with its typed options.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutConfig {
    Hierarchical(HierarchicalOptions),
    Organic(OrganicOptions),
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::Hierarchical(HierarchicalOptions::default())
    }
}

impl LayoutConfig {
    /// Default options for `kind`.
    pub fn new(kind: LayoutKind) -> Self {
        match kind {
            LayoutKind::Hierarchical => Self::Hierarchical(HierarchicalOptions::default()),
            LayoutKind::Organic => Self::Organic(OrganicOptions::default()),
        }
    }

    /// Reads `{"type": "<kind>", ...options}`. Keys other than `type` go to the engine's options;
    /// keys the engine does not know are ignored.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(Error::ConfigNotObject);
        };
        let kind: LayoutKind = map
            .get("type")
            .and_then(Value::as_str)
            .ok_or(Error::MissingLayoutType)?
            .parse()?;

        let options: Map<String, Value> = map
            .iter()
            .filter(|(k, _)| k.as_str() != "type")
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let options = Value::Object(options);

        let parsed = match kind {
            LayoutKind::Hierarchical => serde_json::from_value(options).map(Self::Hierarchical),
            LayoutKind::Organic => serde_json::from_value(options).map(Self::Organic),
        };
        parsed.map_err(|source| Error::InvalidConfig { kind, source })
    }

    pub fn kind(&self) -> LayoutKind {
        match self {
            Self::Hierarchical(_) => LayoutKind::Hierarchical,
            Self::Organic(_) => LayoutKind::Organic,
        }
    }
}
