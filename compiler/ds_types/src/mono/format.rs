//! Canonical textual rendering.
//!
//! The output is the datashape grammar itself, so anything rendered here
//! parses back to an equal node.

use std::fmt;

use super::Mono;

impl fmt::Display for Mono {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mono::Fixed(n) => write!(f, "{n}"),
            Mono::Var => f.write_str("var"),
            Mono::TypeVar(tv) => write!(f, "{tv}"),
            Mono::Ellipsis(None) => f.write_str("..."),
            Mono::Ellipsis(Some(tv)) => write!(f, "{tv}..."),
            Mono::CType(ctype) => write!(f, "{ctype}"),
            Mono::String(string) => write!(f, "{string}"),
            Mono::Date => f.write_str("date"),
            Mono::Time(tz) => write_temporal(f, "time", tz.as_deref()),
            Mono::DateTime(tz) => write_temporal(f, "datetime", tz.as_deref()),
            Mono::Units(units) => write!(f, "{units}"),
            Mono::Bytes => f.write_str("bytes"),
            Mono::Json => f.write_str("json"),
            Mono::Null => f.write_str("null"),
            Mono::IntegerConstant(n) => write!(f, "{n}"),
            Mono::StringConstant(s) => write_quoted(f, s),
            Mono::Option(inner) => write!(f, "?{inner}"),
            Mono::Record(rec) => write!(f, "{rec}"),
            Mono::Tuple(tuple) => write!(f, "{tuple}"),
            Mono::Function(func) => write!(f, "{func}"),
            Mono::DataShape(ds) => write!(f, "{ds}"),
            Mono::Implements(constraint) => write!(f, "{constraint}"),
        }
    }
}

fn write_temporal(f: &mut fmt::Formatter<'_>, base: &str, tz: Option<&str>) -> fmt::Result {
    f.write_str(base)?;
    if let Some(tz) = tz {
        f.write_str("[tz=")?;
        write_quoted(f, tz)?;
        f.write_str("]")?;
    }
    Ok(())
}

/// Write `s` single-quoted, backslash-escaping quotes and backslashes.
pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("'")?;
    for c in s.chars() {
        if matches!(c, '\'' | '\\') {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("'")
}

/// Write a record field name, quoting it unless it is a plain word.
pub(crate) fn write_field_name(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    if is_plain_word(name) {
        f.write_str(name)
    } else {
        write_quoted(f, name)
    }
}

/// `[A-Za-z_][A-Za-z0-9]*`
fn is_plain_word(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric())
}
