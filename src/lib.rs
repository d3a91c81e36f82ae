//! Derive, detect, and extract single command-line flags.
//!
//! Given a flag's logical name (`"dry run"`), this crate derives its
//! canonical long and short spellings (`--dry-run` / `-dr`), checks an
//! explicitly passed token list for either spelling, and pulls out the
//! following value token when the flag takes one. The result is one
//! immutable [`Flag`] record per definition.
//!
//! ```
//! use flaglet::{FlagDef, TokenList};
//!
//! let tokens = TokenList::new(["-o", "result.txt"]);
//! let output = FlagDef::new("output").resolve(&tokens)?;
//! assert!(output.is_present());
//! assert_eq!(output.value().as_supplied(), Some("result.txt"));
//! # Ok::<(), flaglet::FlagError>(())
//! ```
//!
//! The token list is always an explicit parameter; `TokenList::from_env()`
//! captures the process's own argument vector for callers that want it.

pub mod error;
pub mod flag;
pub mod form;
pub mod tokens;
pub mod value;

pub use error::FlagError;
pub use flag::{Flag, FlagDef};
pub use form::{LongForm, ShortForm};
pub use tokens::TokenList;
pub use value::FlagValue;
