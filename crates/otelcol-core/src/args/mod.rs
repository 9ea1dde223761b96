//! Flag lookups over the raw argument vector.
//!
//! Arguments are forwarded to the collector service untouched, so they are
//! never parsed into a schema here. Both `--flag value` and `--flag=value`
//! forms are recognised.

pub mod errors;

pub use errors::ArgumentError;

/// Ordered process arguments, excluding the program name.
///
/// The only mutation allowed is appending `--key=value` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentVector(Vec<String>);

impl ArgumentVector {
    pub fn new(args: Vec<String>) -> Self {
        Self(args)
    }

    /// Collect the arguments of the current process, skipping the program name.
    pub fn from_process() -> Self {
        std::env::args_os()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    pub fn has_flag(&self, name: &str) -> bool {
        has_flag(&self.0, name)
    }

    pub fn value_of(&self, name: &str) -> Result<Option<&str>, ArgumentError> {
        value_of(&self.0, name)
    }

    /// Append `name=value` to the end of the vector.
    pub fn push_flag(&mut self, name: &str, value: impl std::fmt::Display) {
        self.0.push(format!("{}={}", name, value));
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl FromIterator<String> for ArgumentVector {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for ArgumentVector {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

/// Check whether `name` appears as a bare flag or as `name=...`.
///
/// A flag that merely shares a prefix (`--configfile` vs `--config`) does
/// not match.
pub fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|arg| {
        arg == name
            || arg
                .strip_prefix(name)
                .is_some_and(|rest| rest.starts_with('='))
    })
}

/// Look up the value of `name`.
///
/// Every element is scanned and the last match wins. For `name=value` the
/// value is everything after the first `=`; for a bare `name` it is the
/// following element. That following element is still scanned itself, so
/// `--config --config=b.yaml` resolves to `b.yaml`.
///
/// # Errors
///
/// Returns [`ArgumentError::MissingFlagValue`] when a bare `name` is the
/// final element and has no value after it.
pub fn value_of<'a>(args: &'a [String], name: &str) -> Result<Option<&'a str>, ArgumentError> {
    let mut value = None;

    for (i, arg) in args.iter().enumerate() {
        if arg == name {
            let next = args.get(i + 1).ok_or_else(|| ArgumentError::MissingFlagValue {
                flag: name.to_string(),
            })?;
            value = Some(next.as_str());
        } else if let Some(rest) = arg.strip_prefix(name)
            && let Some(inline) = rest.strip_prefix('=')
        {
            value = Some(inline);
        }
    }

    Ok(value)
}
