/// Split a logical flag name into lowercase word parts.
///
/// Word order is preserved and repeated words are kept. An empty or
/// whitespace-only name yields no parts.
pub(crate) fn name_parts(name: &str) -> Vec<String> {
    name.split_whitespace().map(str::to_lowercase).collect()
}

/// The canonical long spelling of a flag (always with a `--` prefix).
///
/// Derived from the word parts of a logical name (`"dry run"` → `--dry-run`),
/// or constructed from an explicit override; overrides normalize the dash
/// prefix so that bare `force` becomes `--force` while already-dashed input
/// is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LongForm(String);

impl LongForm {
    /// Normalize an explicit long-form override.
    ///
    /// - Already starts with `-` → kept as-is
    /// - Bare `force` → `--force`
    pub fn new(raw: &str) -> Self {
        if raw.starts_with('-') {
            LongForm(raw.to_string())
        } else {
            LongForm(format!("--{raw}"))
        }
    }

    /// `--` + parts joined by `-`. `["dry", "run"]` → `--dry-run`.
    pub(crate) fn derive(parts: &[String]) -> Self {
        LongForm(format!("--{}", parts.join("-")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LongForm {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LongForm {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for LongForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The abbreviated spelling of a flag (always with a `-` prefix).
///
/// Derived as the first letter of each word part (`"dry run"` → `-dr`), or
/// constructed from an explicit override with the same dash normalization
/// as [`LongForm`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortForm(String);

impl ShortForm {
    /// Normalize an explicit short-form override.
    ///
    /// - Already starts with `-` → kept as-is
    /// - Bare `o` → `-o`
    pub fn new(raw: &str) -> Self {
        if raw.starts_with('-') {
            ShortForm(raw.to_string())
        } else {
            ShortForm(format!("-{raw}"))
        }
    }

    /// `-` + the first character of each part. `["dry", "run"]` → `-dr`.
    pub(crate) fn derive(parts: &[String]) -> Self {
        let initials: String = parts.iter().filter_map(|p| p.chars().next()).collect();
        ShortForm(format!("-{initials}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ShortForm {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ShortForm {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for ShortForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
