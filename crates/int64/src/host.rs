//! The contract between boxed integers and the object system of a host.
//!
//! Values are produced by this crate and handed over to the host through
//! [Host::bind]. The host owns them from then on and decides when they are
//! reclaimed.

use slab::Slab;

use crate::{Context, Error, Int64Value, Kind, Operand, Output, Protocol};

/// The object system of a host runtime.
pub trait Host {
    /// A reference to a bound value.
    type Handle;

    /// Take ownership of a value, returning a handle to it.
    ///
    /// Fails with an allocation error if the host can't provide storage.
    fn bind(&mut self, value: Int64Value) -> Result<Self::Handle, Error>;

    /// Resolve a handle to the value it refers to.
    fn resolve(&self, handle: &Self::Handle) -> Option<Int64Value>;
}

/// The result of invoking a protocol through a host, with any produced value
/// already bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Returned<H> {
    /// A handle to a newly bound value.
    Handle(H),
    /// The result of a comparison.
    Bool(bool),
    /// A decimal string.
    String(String),
    /// A width in bytes.
    Size(usize),
}

/// Bind a new signed value.
pub fn push_signed<H>(host: &mut H, value: i64) -> Result<H::Handle, Error>
where
    H: ?Sized + Host,
{
    host.bind(Int64Value::signed(value))
}

/// Bind a new unsigned value.
pub fn push_unsigned<H>(host: &mut H, value: u64) -> Result<H::Handle, Error>
where
    H: ?Sized + Host,
{
    host.bind(Int64Value::unsigned(value))
}

/// Read the raw payload behind a handle as a signed integer, or 0 if there is
/// no handle or it doesn't resolve.
pub fn read_signed<H>(host: &H, handle: Option<&H::Handle>) -> i64
where
    H: ?Sized + Host,
{
    handle
        .and_then(|handle| host.resolve(handle))
        .map_or(0, |value| value.as_i64())
}

/// Read the raw payload behind a handle as an unsigned integer, or 0 if there
/// is no handle or it doesn't resolve.
pub fn read_unsigned<H>(host: &H, handle: Option<&H::Handle>) -> u64
where
    H: ?Sized + Host,
{
    handle
        .and_then(|handle| host.resolve(handle))
        .map_or(0, |value| value.as_u64())
}

/// The `signed(arg?)` constructor.
pub fn new_signed<H>(
    host: &mut H,
    cx: &Context,
    args: &[Operand<'_>],
) -> Result<H::Handle, Error>
where
    H: ?Sized + Host,
{
    host.bind(cx.construct(Kind::Signed, args)?)
}

/// The `unsigned(arg?)` constructor.
pub fn new_unsigned<H>(
    host: &mut H,
    cx: &Context,
    args: &[Operand<'_>],
) -> Result<H::Handle, Error>
where
    H: ?Sized + Host,
{
    host.bind(cx.construct(Kind::Unsigned, args)?)
}

/// Invoke a protocol and bind the value it produces, if any.
pub fn call<H>(
    host: &mut H,
    cx: &Context,
    kind: Kind,
    protocol: Protocol,
    args: &[Operand<'_>],
) -> Result<Returned<H::Handle>, Error>
where
    H: ?Sized + Host,
{
    Ok(match cx.call(kind, protocol, args)? {
        Output::Value(value) => Returned::Handle(host.bind(value)?),
        Output::Bool(b) => Returned::Bool(b),
        Output::String(s) => Returned::String(s),
        Output::Size(n) => Returned::Size(n),
    })
}

/// A handle to a value stored in a [Heap].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(usize);

/// A slab-backed host which stores values in numbered slots.
///
/// Released slots are reused, so a handle must not be used after it has been
/// released.
#[derive(Debug, Default)]
pub struct Heap {
    slots: Slab<Int64Value>,
    limit: Option<usize>,
}

impl Heap {
    /// Construct an unbounded heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a heap which holds at most `limit` live values.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            slots: Slab::new(),
            limit: Some(limit),
        }
    }

    /// Release the value behind a handle, returning it if it was live.
    pub fn release(&mut self, handle: Handle) -> Option<Int64Value> {
        if !self.slots.contains(handle.0) {
            return None;
        }

        tracing::trace!(slot = handle.0, "release");
        Some(self.slots.remove(handle.0))
    }

    /// The number of live values.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Test if the heap holds no live values.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Host for Heap {
    type Handle = Handle;

    fn bind(&mut self, value: Int64Value) -> Result<Handle, Error> {
        if matches!(self.limit, Some(limit) if self.slots.len() >= limit) {
            return Err(Error::allocation(value.kind()));
        }

        let slot = self.slots.insert(value);
        tracing::trace!(slot, kind = %value.kind(), "bind");
        Ok(Handle(slot))
    }

    fn resolve(&self, handle: &Handle) -> Option<Int64Value> {
        self.slots.get(handle.0).copied()
    }
}
