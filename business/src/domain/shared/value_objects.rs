use serde_json::Value;

/// Error returned when an id cannot be read as a canonical integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("id.invalid")]
pub struct InvalidId;

fn parse_id(raw: &str) -> Result<u64, InvalidId> {
    raw.trim().parse::<u64>().map_err(|_| InvalidId)
}

fn id_from_json(value: &Value) -> Result<u64, InvalidId> {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(id) => Ok(id),
            None => match n.as_f64() {
                Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Ok(f as u64),
                _ => Err(InvalidId),
            },
        },
        Value::String(s) => parse_id(s),
        _ => Err(InvalidId),
    }
}

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u64);

        impl $name {
            pub fn new(value: u64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> u64 {
                self.0
            }

            /// Accepts a JSON number or a numeric string.
            pub fn from_json(value: &Value) -> Result<Self, InvalidId> {
                id_from_json(value).map(Self)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidId;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_id(s).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

integer_id!(
    /// Auto-incremented product identifier.
    ProductId
);
integer_id!(
    /// Auto-incremented cart identifier.
    CartId
);

/// A loosely typed input value, as received from forms and JSON bodies,
/// before it is coerced into a model field.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Converts a JSON value. `null` means "not provided"; arrays and objects
    /// are kept as their JSON text.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(Scalar::Bool(b)),
            Value::Number(n) => n.as_f64().map(Scalar::Number),
            Value::String(s) => Some(Scalar::Text(s)),
            other => Some(Scalar::Text(other.to_string())),
        }
    }

    /// Empty text counts as a missing value for required fields.
    pub fn is_blank(&self) -> bool {
        matches!(self, Scalar::Text(s) if s.is_empty())
    }

    pub fn to_text(&self) -> String {
        match self {
            Scalar::Bool(b) => b.to_string(),
            Scalar::Number(n) => format_number(*n),
            Scalar::Text(s) => s.clone(),
        }
    }

    /// Numeric coercion. Blank text reads as zero, booleans as 0/1.
    pub fn to_number(&self) -> Option<f64> {
        let n = match self {
            Scalar::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Scalar::Number(n) => *n,
            Scalar::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().ok()?
                }
            }
        };
        n.is_finite().then_some(n)
    }

    pub fn to_integer(&self) -> Option<i64> {
        let n = self.to_number()?;
        if n.fract() != 0.0 || n < i64::MIN as f64 || n > i64::MAX as f64 {
            return None;
        }
        Some(n as i64)
    }

    pub fn truthy(&self) -> bool {
        match self {
            Scalar::Bool(b) => *b,
            Scalar::Number(n) => *n != 0.0 && !n.is_nan(),
            Scalar::Text(s) => !s.is_empty(),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Thumbnails default to empty unless the input is a sequence.
pub fn thumbnails_from_json(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Null => None,
                Value::String(s) => Some(s),
                other => Some(other.to_string()),
            })
            .collect(),
        _ => Vec::new(),
    }
}
