//! Validators
//!
//!     Narrow, stateless checks grouped by the construct they police. Each one takes only what it
//!     needs to decide plus the [Line](crate::usl::lexing::Line) for context, and either returns
//!     normally (sometimes with the parsed value) or raises exactly one diagnostic.
//!
//!     spaces        reserved and custom space headers, owners, duplicate spaces
//!     indentation   `_indent` values and body-line indentation
//!     links         names declared inside `_links`
//!     declarations  field counts and fields of `_consts` / `_pre` / `_stdin` records
//!     literals      per-type literal values and `~` references

pub mod declarations;
pub mod indentation;
pub mod links;
pub mod literals;
pub mod spaces;
