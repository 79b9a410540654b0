use crate::compat::{String, ToString, format};

/// A loosely typed parameter value.
///
/// Falsy values (`Null`, `false`, `0`, `0.0`, `NaN`, `""`) remove a key
/// when passed to [`QueryParameterSet::update`](crate::QueryParameterSet::update).
///
/// Floats are stored the way JavaScript prints numbers: `2.5`, `3`,
/// `0.000001`, `1e-7`, `1e+21`, `Infinity`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ParamValue {
    /// Absent value (`null`, `undefined`, a segment without `=`)
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ParamValue {
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Float(f) => *f != 0.0 && !f.is_nan(),
            Self::Str(s) => !s.is_empty(),
        }
    }

    /// Text stored for a truthy value, `None` for a falsy one
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Str(s) if !s.is_empty() => Some(s),
            Self::Bool(true) => Some("true".to_string()),
            Self::Int(n) if n != 0 => Some(n.to_string()),
            Self::Float(f) if f != 0.0 && !f.is_nan() => Some(format_number(f)),
            _ => None,
        }
    }
}

/// Format a finite or infinite float with JavaScript's `Number#toString` rules.
fn format_number(f: f64) -> String {
    if f.is_infinite() {
        let text = if f > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    // Shortest round-trip digits, e.g. "1.2345e3"
    let scientific = format!("{:e}", f.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return f.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return f.to_string();
    };

    let digits: String = mantissa.chars().filter(|&c| c != '.').collect();
    let k = digits.len() as i32;
    let n = exponent + 1;
    let sign = if f < 0.0 { "-" } else { "" };

    if k <= n && n <= 21 {
        format!("{sign}{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{sign}{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("{sign}0.{}{digits}", "0".repeat(n.unsigned_abs() as usize))
    } else {
        let (first, rest) = digits.split_at(1);
        let e = n - 1;
        let e_sign = if e < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{sign}{first}e{e_sign}{}", e.unsigned_abs())
        } else {
            format!("{sign}{first}.{rest}e{e_sign}{}", e.unsigned_abs())
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for ParamValue {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        Self::Int(n.into())
    }
}

impl From<usize> for ParamValue {
    fn from(n: usize) -> Self {
        // Counts beyond i64::MAX are still non-zero
        i64::try_from(n).map_or_else(|_| Self::Str(n.to_string()), Self::Int)
    }
}

impl From<f64> for ParamValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
