// SPDX-License-Identifier: MIT OR Apache-2.0

//! The values a log call may carry.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/**
A message or extra argument passed to a leveled method.

This is a closed set: strings, numbers, booleans, ordered sequences, keyed records,
and the two "no value" markers.
*/
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LogParameter {
    Str(String),
    Number(f64),
    Bool(bool),
    Array(Vec<LogParameter>),
    Record(BTreeMap<String, LogParameter>),
    #[default]
    Undefined,
    Null,
}

impl LogParameter {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LogParameter::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, LogParameter::Undefined | LogParameter::Null)
    }
}

impl Display for LogParameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogParameter::Str(s) => f.write_str(s),
            LogParameter::Number(n) => write!(f, "{n}"),
            LogParameter::Bool(b) => write!(f, "{b}"),
            LogParameter::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_nested(f)?;
                }
                f.write_str("]")
            }
            LogParameter::Record(fields) => {
                if fields.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{ ")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: ")?;
                    value.fmt_nested(f)?;
                }
                f.write_str(" }")
            }
            LogParameter::Undefined => f.write_str("undefined"),
            LogParameter::Null => f.write_str("null"),
        }
    }
}

impl LogParameter {
    //strings inside containers are quoted so `["a, b"]` stays distinguishable from `["a", "b"]`
    fn fmt_nested(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogParameter::Str(s) => write!(f, "{s:?}"),
            other => other.fmt(f),
        }
    }
}

impl From<&str> for LogParameter {
    fn from(value: &str) -> Self {
        LogParameter::Str(value.to_string())
    }
}

impl From<String> for LogParameter {
    fn from(value: String) -> Self {
        LogParameter::Str(value)
    }
}

impl From<&String> for LogParameter {
    fn from(value: &String) -> Self {
        LogParameter::Str(value.clone())
    }
}

impl From<bool> for LogParameter {
    fn from(value: bool) -> Self {
        LogParameter::Bool(value)
    }
}

macro_rules! number_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for LogParameter {
                fn from(value: $t) -> Self {
                    LogParameter::Number(value as f64)
                }
            }
        )*
    };
}
number_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: Into<LogParameter>> From<Vec<T>> for LogParameter {
    fn from(value: Vec<T>) -> Self {
        LogParameter::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<LogParameter>> From<Option<T>> for LogParameter {
    fn from(value: Option<T>) -> Self {
        value.map_or(LogParameter::Undefined, Into::into)
    }
}

impl<K: Into<String>, V: Into<LogParameter>> FromIterator<(K, V)> for LogParameter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        LogParameter::Record(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/**
Builds the extra-argument list for a leveled method from heterogeneous values.

```
use scribe::{params, LogParameter};
let args = params![12, "abc", true];
assert_eq!(args, vec![LogParameter::Number(12.0), "abc".into(), LogParameter::Bool(true)]);
```
*/
#[macro_export]
macro_rules! params {
    () => { ::std::vec::Vec::<$crate::LogParameter>::new() };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::LogParameter::from($value)),+]
    };
}
