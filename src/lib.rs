//! URL classification, percent-quoting, and relative-path utilities.
//!
//! This crate is a stateless function library over URL strings. It answers
//! the questions a document loader or schema validator asks about a URL
//! without building a full URI object model: is this string a plausible URI
//! reference, is it an absolute URL under a known scheme, what is its
//! authority, what does its fragment decode to, and how do I write it
//! relative to another document.
//!
//! # Overview
//!
//! - [`authority`] pulls `scheme://host:port` out of a URL by character
//!   scanning, without grammar validation.
//! - [`is_valid`] is a permissive syntactic sieve over the generic RFC 3986
//!   `URI-reference` production.
//! - [`is_valid_absolute`] is a strict validator covering a fixed set of
//!   classic URL schemes (`http`, `ftp`, `mailto`, `file`, `ldap`, `imap`,
//!   and friends) plus bare filesystem-style paths.
//! - [`is_absolute`] is a fast 3-way scheme classification.
//! - [`split_decode_fragment`] separates a URL from its `#fragment` and
//!   percent-decodes the fragment as UTF-8.
//! - [`any_uri_quote_for_psvi`] percent-encodes a value only when it
//!   contains characters illegal in a schema-validated `anyURI` value.
//! - [`relative_uri`] rewrites a target URL relative to the directory of a
//!   base URL.
//! - [`parse_rfc_datetime`] parses an RFC 2822 date string into a calendar
//!   timestamp.
//!
//! # Quick Start
//!
//! ```rust
//! use url_util::{authority, is_absolute, is_valid_absolute, split_decode_fragment};
//!
//! assert_eq!(authority("http://a.b/c/d", true), "http://a.b");
//! assert!(is_valid_absolute("http://example.com/path?q=1"));
//! assert!(is_absolute("urn:foo"));
//!
//! let (base, frag) = split_decode_fragment("http://a/b#c%20d");
//! assert_eq!(base, "http://a/b");
//! assert_eq!(frag, "c d");
//! ```
//!
//! # Error Handling
//!
//! No function here returns `Err` or panics for any string input, including
//! the empty string. Malformed input is answered with a sentinel: `false`
//! from the validators, the input unchanged from the extractors, an empty
//! fragment, or `None` from the date parser.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

mod absolute;
mod authority;
mod datetime;
mod fragment;
mod quote;
mod relative;
mod relpath;
mod scheme;

pub use absolute::is_valid_absolute;
pub use authority::authority;
pub use datetime::parse_rfc_datetime;
pub use fragment::split_decode_fragment;
pub use quote::any_uri_quote_for_psvi;
pub use relative::is_valid;
pub use relpath::relative_uri;
pub use scheme::is_absolute;
