/// Errors raised while resolving a flag against the token list.
///
/// Both resolution errors are raised synchronously at the point of
/// detection; no partial record is ever returned. Callers are expected to
/// surface them as usage errors.
#[derive(Debug, thiserror::Error)]
pub enum FlagError {
    /// The logical name was empty or whitespace-only, so no forms can be
    /// derived from it.
    #[error("flag name must contain at least one word")]
    EmptyName,

    /// A flag declared empty (a bare switch) was given a value override.
    ///
    /// Only reachable when the flag is absent from the token list: when it
    /// is present, extraction overwrites the override before the record is
    /// built.
    #[error("cannot set value ({value}) for empty flag ({flag})")]
    ValueOnEmptyFlag { flag: String, value: String },

    /// A value-taking flag matched at the final token position, with no
    /// following token to read the value from.
    #[error("flag {flag} expects a value but none followed it")]
    MissingValue { flag: String },
}
