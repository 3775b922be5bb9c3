/// Which operation a transcoding pass performs.
///
/// Exactly one action is active per pass, and each field-binding call
/// dispatches on it:
///
/// ```text
/// ┌─────────────┬──────────────────────────────────────────────┐
/// │ Action      │ Effect per field                             │
/// ├─────────────┼──────────────────────────────────────────────┤
/// │ ComputeSize │ accumulate serialized width, stream untouched │
/// │ Serialize   │ append the field's encoding to the stream     │
/// │ Deserialize │ read the field from the stream, overwriting   │
/// └─────────────┴──────────────────────────────────────────────┘
/// ```
///
/// `ComputeSize` and `Serialize` must always agree: the measured width of
/// a value equals the number of bytes the write pass emits for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ComputeSize,
    Serialize,
    Deserialize,
}
