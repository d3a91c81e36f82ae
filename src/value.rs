use crate::error::FlagError;
use crate::form::{LongForm, ShortForm};
use crate::tokens::TokenList;

/// The parsed value state of one flag.
///
/// A supplied token that happens to equal the text `"False"` stays
/// distinguishable from absence; the conventional `"True"`/`"False"`
/// strings exist only in the [`Display`] rendering.
///
/// [`Display`]: std::fmt::Display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// Neither form appeared among the tokens. Renders as `False`.
    Absent,
    /// The flag is an empty flag (bare switch) and was present. Renders as
    /// `True`.
    Switch,
    /// The literal token that followed the matched form.
    Supplied(String),
}

impl FlagValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, FlagValue::Absent)
    }

    /// The supplied value token, if there was one.
    pub fn as_supplied(&self) -> Option<&str> {
        match self {
            FlagValue::Supplied(value) => Some(value),
            _ => None,
        }
    }
}

impl std::fmt::Display for FlagValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagValue::Absent => write!(f, "False"),
            FlagValue::Switch => write!(f, "True"),
            FlagValue::Supplied(value) => write!(f, "{value}"),
        }
    }
}

/// Locate the value for a flag within the token list.
///
/// An empty flag yields [`FlagValue::Switch`] as soon as presence is
/// confirmed, with no lookahead. Otherwise the value is the literal token
/// after the matched form, even when that token itself looks like a flag.
/// When both spellings occur, the long form's position is authoritative.
///
/// Fails with [`FlagError::MissingValue`] when a value-taking flag matched
/// at the final token position.
pub(crate) fn extract(
    long: &LongForm,
    short: &ShortForm,
    empty: bool,
    tokens: &TokenList,
) -> Result<FlagValue, FlagError> {
    let long_at = tokens.position(long.as_str());
    let short_at = tokens.position(short.as_str());

    let Some(index) = long_at.or(short_at) else {
        return Ok(FlagValue::Absent);
    };

    if empty {
        return Ok(FlagValue::Switch);
    }

    let matched = if long_at.is_some() {
        long.as_str()
    } else {
        short.as_str()
    };

    match tokens.get(index + 1) {
        Some(value) => Ok(FlagValue::Supplied(value.to_string())),
        None => Err(FlagError::MissingValue {
            flag: matched.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forms() -> (LongForm, ShortForm) {
        (LongForm::new("--out"), ShortForm::new("-o"))
    }

    #[test]
    fn absent_when_neither_form_in_tokens() {
        let (long, short) = forms();
        let tokens = TokenList::new(["--verbose", "file.txt"]);
        let value = extract(&long, &short, false, &tokens).unwrap();
        assert_eq!(value, FlagValue::Absent);
    }

    #[test]
    fn empty_flag_yields_switch_without_lookahead() {
        let (long, short) = forms();
        let tokens = TokenList::new(["--out"]);
        let value = extract(&long, &short, true, &tokens).unwrap();
        assert_eq!(value, FlagValue::Switch);
    }

    #[test]
    fn long_form_value_is_next_token() {
        let (long, short) = forms();
        let tokens = TokenList::new(["--out", "result.txt"]);
        let value = extract(&long, &short, false, &tokens).unwrap();
        assert_eq!(value, FlagValue::Supplied("result.txt".to_string()));
    }

    #[test]
    fn short_form_value_is_next_token() {
        let (long, short) = forms();
        let tokens = TokenList::new(["-o", "result.txt"]);
        let value = extract(&long, &short, false, &tokens).unwrap();
        assert_eq!(value, FlagValue::Supplied("result.txt".to_string()));
    }

    #[test]
    fn long_form_position_wins_over_short() {
        let (long, short) = forms();
        let tokens = TokenList::new(["-o", "short-val", "--out", "long-val"]);
        let value = extract(&long, &short, false, &tokens).unwrap();
        assert_eq!(value, FlagValue::Supplied("long-val".to_string()));
    }

    #[test]
    fn value_token_taken_literally_even_if_dashed() {
        let (long, short) = forms();
        let tokens = TokenList::new(["--out", "--verbose"]);
        let value = extract(&long, &short, false, &tokens).unwrap();
        assert_eq!(value, FlagValue::Supplied("--verbose".to_string()));
    }

    #[test]
    fn flag_at_final_position_fails() {
        let (long, short) = forms();
        let tokens = TokenList::new(["file.txt", "--out"]);
        let err = extract(&long, &short, false, &tokens).unwrap_err();
        assert!(matches!(err, FlagError::MissingValue { flag } if flag == "--out"));
    }

    #[test]
    fn short_flag_at_final_position_names_short_form() {
        let (long, short) = forms();
        let tokens = TokenList::new(["-o"]);
        let err = extract(&long, &short, false, &tokens).unwrap_err();
        assert!(matches!(err, FlagError::MissingValue { flag } if flag == "-o"));
    }

    #[test]
    fn empty_flag_at_final_position_is_fine() {
        let (long, short) = forms();
        let tokens = TokenList::new(["file.txt", "--out"]);
        let value = extract(&long, &short, true, &tokens).unwrap();
        assert_eq!(value, FlagValue::Switch);
    }

    #[test]
    fn display_renders_sentinels() {
        assert_eq!(FlagValue::Absent.to_string(), "False");
        assert_eq!(FlagValue::Switch.to_string(), "True");
        assert_eq!(
            FlagValue::Supplied("False".to_string()).to_string(),
            "False"
        );
    }

    #[test]
    fn as_supplied_only_for_supplied() {
        assert_eq!(FlagValue::Absent.as_supplied(), None);
        assert_eq!(FlagValue::Switch.as_supplied(), None);
        assert_eq!(
            FlagValue::Supplied("x".to_string()).as_supplied(),
            Some("x")
        );
    }
}
