//! Boxed signed and unsigned 64-bit integers for dynamic runtimes.
//!
//! Hosts whose native numbers are doubles can't represent every 64-bit
//! integer. This crate provides a value type which can, together with the
//! operators a host exposes on it:
//!
//! * [Int64Value] is the value itself, a raw payload tagged with a [Kind].
//! * [Context] constructs values from host [Operand]s and dispatches each
//!   [Protocol] for the family of a kind.
//! * [host] is the contract towards the object system of the host, with a
//!   slab-backed [Heap][host::Heap] to embed into.
//!
//! ```
//! use int64::{Context, Kind, Output, Protocol};
//!
//! let cx = Context::new();
//!
//! let a = cx.construct(Kind::Signed, &["9223372036854775807".into()])?;
//! let out = cx.call(Kind::Signed, Protocol::Add, &[a.into(), 1i64.into()])?;
//! assert_eq!(out.to_string(), "-9223372036854775808");
//! # Ok::<_, int64::Error>(())
//! ```
//!
//! ## Features
//!
//! * `serde` (default) serializes values as decimal strings tagged with their
//!   kind.

#![deny(missing_docs)]

mod context;
mod error;
pub mod host;
mod kind;
mod operand;
mod options;
mod parse;
mod protocol;
mod value;

pub use self::context::{Context, Output};
pub use self::error::{ConfigurationError, Error, ErrorKind};
pub use self::kind::Kind;
pub use self::operand::{Number, Operand};
pub use self::options::{ByteWidth, Options};
pub use self::protocol::Protocol;
pub use self::value::Int64Value;
