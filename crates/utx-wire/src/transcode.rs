use crate::action::Action;
use crate::compact::{compact_size_len, read_compact_size, write_compact_size};
use crate::error::WireError;
use crate::scope::Scope;
use crate::stream::DataStream;

/// One transcoding pass over a [`DataStream`].
///
/// A `Transcoder` pairs a stream with the [`Action`] of the current pass
/// and routes every [`bind`](Self::bind) call to the matching codec
/// operation. This is what lets a type declare its field list once and
/// have the same declaration measure, write, and read:
///
/// ```text
///   entity.transcode(t)
///     └─ t.bind(&mut field)          for each field, in order
///          └─ field.transcode(t)     dispatch on the field's shape
///               ├─ ComputeSize  → accumulate width, stream untouched
///               ├─ Serialize    → append the field's encoding
///               └─ Deserialize  → read into the field
/// ```
///
/// Every `bind` call propagates its error immediately: the first failure
/// aborts the remaining fields of the pass, so no partial, best-effort
/// entity ever escapes a failed deserialize.
pub struct Transcoder<'s> {
    stream: &'s mut DataStream,
    action: Action,
    measured: usize,
}

impl<'s> Transcoder<'s> {
    /// Start a pass over `stream` performing `action`.
    pub fn new(stream: &'s mut DataStream, action: Action) -> Self {
        Self {
            stream,
            action,
            measured: 0,
        }
    }

    /// The action of the current pass.
    pub fn action(&self) -> Action {
        self.action
    }

    /// The scope of the underlying stream.
    ///
    /// Field lists test this to make a field scope-conditional.
    pub fn scope(&self) -> Scope {
        self.stream.scope()
    }

    /// Bytes accumulated so far by a `ComputeSize` pass.
    pub fn measured(&self) -> usize {
        self.measured
    }

    /// Bind one field of the owning entity to the current pass.
    ///
    /// # Errors
    ///
    /// Propagates whatever the field's codec operation reports; callers
    /// short-circuit with `?` so the first failure ends the pass.
    pub fn bind<T: Transcodable + ?Sized>(&mut self, field: &mut T) -> Result<(), WireError> {
        field.transcode(self)
    }

    /// Record `n` bytes on a measuring pass. No-op stream-wise.
    pub(crate) fn add(&mut self, n: usize) {
        self.measured += n;
    }

    /// The stream behind a `Serialize`/`Deserialize` pass.
    pub(crate) fn stream(&mut self) -> &mut DataStream {
        self.stream
    }
}

/// The capability every transcodable domain type implements.
///
/// A type declares the ordered list of its fields exactly once, in
/// [`transcode`](Self::transcode), as a short-circuiting sequence of
/// [`Transcoder::bind`] calls. The three derived entry points then run
/// that one routine under each [`Action`]. Nested entities compose for
/// free: a child's `transcode` is invoked as one field of the parent's
/// list, so composite structures recurse with no special-casing.
///
/// The routine takes `&mut self` under every action because the same
/// code path must mutate under `Deserialize`; measuring and writing
/// never actually modify the value.
pub trait Transcodable {
    /// Declare, in fixed order, how each field binds to the active pass.
    ///
    /// # Errors
    ///
    /// Returns the first [`WireError`] any field binding reports.
    fn transcode(&mut self, t: &mut Transcoder<'_>) -> Result<(), WireError>;

    /// The number of bytes [`serialize`](Self::serialize) would write to
    /// a stream of this scope. Never touches the stream's cursor or
    /// buffer.
    ///
    /// # Errors
    ///
    /// Returns the first [`WireError`] any field binding reports.
    fn serialized_size(&mut self, stream: &mut DataStream) -> Result<usize, WireError> {
        let mut t = Transcoder::new(stream, Action::ComputeSize);
        self.transcode(&mut t)?;
        Ok(t.measured())
    }

    /// Append this value's encoding to the stream.
    ///
    /// # Errors
    ///
    /// Returns the first [`WireError`] any field binding reports.
    fn serialize(&mut self, stream: &mut DataStream) -> Result<(), WireError> {
        let mut t = Transcoder::new(stream, Action::Serialize);
        self.transcode(&mut t)
    }

    /// Read this value from the stream, overwriting its fields in place.
    ///
    /// # Errors
    ///
    /// Returns the first [`WireError`] any field binding reports; on
    /// failure the value may be partially overwritten and must be
    /// discarded by the caller.
    fn deserialize(&mut self, stream: &mut DataStream) -> Result<(), WireError> {
        let mut t = Transcoder::new(stream, Action::Deserialize);
        self.transcode(&mut t)
    }
}

/// Serialize a value into a fresh byte vector under the given scope.
///
/// # Errors
///
/// Returns the first [`WireError`] the serialize pass reports.
pub fn encode_to_vec<T: Transcodable>(value: &mut T, scope: Scope) -> Result<Vec<u8>, WireError> {
    let mut stream = DataStream::new(scope);
    value.serialize(&mut stream)?;
    Ok(stream.into_bytes())
}

/// Deserialize a value of type `T` from a byte slice under the given
/// scope. Trailing bytes are left to the caller to police via the
/// returned consumed count.
///
/// # Errors
///
/// Returns the first [`WireError`] the deserialize pass reports.
pub fn decode_from_slice<T: Transcodable + Default>(
    bytes: &[u8],
    scope: Scope,
) -> Result<(T, usize), WireError> {
    let mut stream = DataStream::from_bytes(scope, bytes);
    let mut value = T::default();
    value.deserialize(&mut stream)?;
    let consumed = bytes.len() - stream.remaining();
    Ok((value, consumed))
}

// ── Primitive shapes ──────────────────────────────────────────────────────────

macro_rules! impl_fixed_int {
    ($($ty:ty => $width:expr),* $(,)?) => {$(
        impl Transcodable for $ty {
            fn transcode(&mut self, t: &mut Transcoder<'_>) -> Result<(), WireError> {
                match t.action() {
                    Action::ComputeSize => {
                        t.add($width);
                        Ok(())
                    }
                    Action::Serialize => {
                        t.stream().write(&self.to_le_bytes());
                        Ok(())
                    }
                    Action::Deserialize => {
                        *self = <$ty>::from_le_bytes(t.stream().read_array()?);
                        Ok(())
                    }
                }
            }
        }
    )*};
}

impl_fixed_int!(
    u8 => 1,
    u16 => 2,
    u32 => 4,
    u64 => 8,
    i32 => 4,
    i64 => 8,
);

impl Transcodable for bool {
    fn transcode(&mut self, t: &mut Transcoder<'_>) -> Result<(), WireError> {
        match t.action() {
            Action::ComputeSize => {
                t.add(1);
                Ok(())
            }
            Action::Serialize => {
                t.stream().write(&[u8::from(*self)]);
                Ok(())
            }
            Action::Deserialize => {
                // Any non-zero byte reads as true
                *self = t.stream().read_array::<1>()?[0] != 0;
                Ok(())
            }
        }
    }
}

/// Raw fixed-size byte arrays: no length prefix, exactly `N` bytes.
///
/// This is the shape behind fixed digests and address bytes.
impl<const N: usize> Transcodable for [u8; N] {
    fn transcode(&mut self, t: &mut Transcoder<'_>) -> Result<(), WireError> {
        match t.action() {
            Action::ComputeSize => {
                t.add(N);
                Ok(())
            }
            Action::Serialize => {
                t.stream().write(&self[..]);
                Ok(())
            }
            Action::Deserialize => {
                *self = t.stream().read_array::<N>()?;
                Ok(())
            }
        }
    }
}

/// Variable-length byte strings: CompactSize length prefix + raw bytes.
///
/// On deserialize the claimed length is validated against the remaining
/// stream bytes before anything is allocated, so a hostile length field
/// cannot force an oversized reservation.
impl Transcodable for Vec<u8> {
    fn transcode(&mut self, t: &mut Transcoder<'_>) -> Result<(), WireError> {
        match t.action() {
            Action::ComputeSize => {
                t.add(compact_size_len(self.len() as u64) + self.len());
                Ok(())
            }
            Action::Serialize => {
                write_compact_size(t.stream(), self.len() as u64);
                t.stream().write(self);
                Ok(())
            }
            Action::Deserialize => {
                let stream = t.stream();
                // Bounded by MAX_SERIALIZED_COMPACT_SIZE, so the cast is lossless
                let len = read_compact_size(stream)? as usize;
                *self = stream.read(len)?.to_vec();
                Ok(())
            }
        }
    }
}

/// Strings transcode as their UTF-8 bytes with a CompactSize prefix.
impl Transcodable for String {
    fn transcode(&mut self, t: &mut Transcoder<'_>) -> Result<(), WireError> {
        match t.action() {
            Action::ComputeSize => {
                t.add(compact_size_len(self.len() as u64) + self.len());
                Ok(())
            }
            Action::Serialize => {
                write_compact_size(t.stream(), self.len() as u64);
                t.stream().write(self.as_bytes());
                Ok(())
            }
            Action::Deserialize => {
                let stream = t.stream();
                let len = read_compact_size(stream)? as usize;
                let bytes = stream.read(len)?.to_vec();
                *self = String::from_utf8(bytes).map_err(|_| WireError::InvalidString)?;
                Ok(())
            }
        }
    }
}
