use crate::error::FlagError;
use crate::form::{self, LongForm, ShortForm};
use crate::tokens::TokenList;
use crate::value::{self, FlagValue};

/// One flag's parsed state for a single invocation.
///
/// Built by [`FlagDef::resolve`] and never mutated afterwards: all fields
/// are read through accessors, and resolving the same definition against the
/// same tokens twice yields equal records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    name: String,
    long: LongForm,
    short: ShortForm,
    description: String,
    present: bool,
    empty: bool,
    value: FlagValue,
}

impl Flag {
    /// The logical name the flag was declared with. May contain spaces.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The canonical long spelling, e.g. `--dry-run`.
    pub fn long(&self) -> &LongForm {
        &self.long
    }

    /// The abbreviated spelling, e.g. `-dr`.
    pub fn short(&self) -> &ShortForm {
        &self.short
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether either spelling appeared among the tokens.
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Whether the flag is an empty flag: a bare switch taking no value
    /// token.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn value(&self) -> &FlagValue {
        &self.value
    }
}

/// Renders the fixed multi-line diagnostic block, one field per line.
/// For human display only; nothing parses this back.
impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Flag ({})\n Short ({})\n Name: {}\n Empty Arg: {}\n Description: {}",
            self.long, self.short, self.name, self.empty, self.description
        )
    }
}

/// Declarative description of one flag, resolved against a token list.
///
/// The logical name is required; everything else is optional. Long and
/// short spellings are derived from the name's word parts unless overridden.
///
/// ```
/// use flaglet::{FlagDef, FlagValue, TokenList};
///
/// let tokens = TokenList::new(["--dry-run"]);
/// let flag = FlagDef::new("dry run").empty().resolve(&tokens)?;
/// assert!(flag.is_present());
/// assert_eq!(*flag.value(), FlagValue::Switch);
/// # Ok::<(), flaglet::FlagError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FlagDef {
    name: String,
    long: Option<LongForm>,
    short: Option<ShortForm>,
    description: String,
    value: String,
    empty: bool,
}

impl FlagDef {
    pub fn new(name: impl Into<String>) -> Self {
        FlagDef {
            name: name.into(),
            long: None,
            short: None,
            description: String::new(),
            value: String::new(),
            empty: false,
        }
    }

    /// Override the derived long spelling. Bare input gains a `--` prefix;
    /// already-dashed input is kept as-is.
    pub fn long(mut self, raw: &str) -> Self {
        self.long = Some(LongForm::new(raw));
        self
    }

    /// Override the derived short spelling. Bare input gains a `-` prefix;
    /// already-dashed input is kept as-is.
    pub fn short(mut self, raw: &str) -> Self {
        self.short = Some(ShortForm::new(raw));
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Caller-supplied value. Overwritten by extraction when the flag is
    /// present and discarded when it is not; a non-empty override on an
    /// empty flag is rejected at resolution.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Declare the flag an empty flag: a bare boolean switch that takes no
    /// value token.
    pub fn empty(mut self) -> Self {
        self.empty = true;
        self
    }

    /// Resolve this definition against `tokens` into an immutable [`Flag`].
    ///
    /// Derives the long and short spellings if not overridden, detects
    /// presence by exact membership of either spelling, and extracts the
    /// value when present.
    ///
    /// # Errors
    ///
    /// - [`FlagError::EmptyName`]: the logical name has no words.
    /// - [`FlagError::ValueOnEmptyFlag`]: a non-empty value override on an
    ///   empty flag that is absent from the tokens.
    /// - [`FlagError::MissingValue`]: a value-taking flag matched at the
    ///   final token position.
    pub fn resolve(self, tokens: &TokenList) -> Result<Flag, FlagError> {
        let parts = form::name_parts(&self.name);
        if parts.is_empty() {
            return Err(FlagError::EmptyName);
        }

        let long = self.long.unwrap_or_else(|| LongForm::derive(&parts));
        let short = self.short.unwrap_or_else(|| ShortForm::derive(&parts));

        let present = tokens.contains(long.as_str()) || tokens.contains(short.as_str());

        // When present, extraction overwrites the override before the record
        // exists, so the conflict is only observable on an absent flag.
        if !present && self.empty && !self.value.is_empty() {
            return Err(FlagError::ValueOnEmptyFlag {
                flag: long.to_string(),
                value: self.value,
            });
        }

        let value = if present {
            value::extract(&long, &short, self.empty, tokens)?
        } else {
            FlagValue::Absent
        };

        tracing::debug!(flag = %long, present, value = %value, "resolved flag");

        Ok(Flag {
            name: self.name,
            long,
            short,
            description: self.description,
            present,
            empty: self.empty,
            value,
        })
    }
}
