use crate::error::WireError;
use crate::stream::DataStream;

/// Largest value a decoded CompactSize may carry.
///
/// Length fields larger than this are rejected before any allocation
/// happens, bounding what a hostile peer can make the decoder reserve.
pub const MAX_SERIALIZED_COMPACT_SIZE: u64 = 0x0200_0000;

/// Width in bytes of the minimal encoding for `value`.
///
/// Mirrors [`write_compact_size`]'s width choice without writing; this is
/// what `ComputeSize` passes call.
///
/// # Wire format
///
/// | Value range                | Encoded form            | Length |
/// |----------------------------|-------------------------|--------|
/// | `0 ..= 0xFC`               | value as one byte       | 1      |
/// | `0xFD ..= 0xFFFF`          | `0xFD` + u16 LE         | 3      |
/// | `0x1_0000 ..= 0xFFFF_FFFF` | `0xFE` + u32 LE         | 5      |
/// | larger                     | `0xFF` + u64 LE         | 9      |
pub fn compact_size_len(value: u64) -> usize {
    match value {
        0..=0xFC => 1,
        0xFD..=0xFFFF => 3,
        0x1_0000..=0xFFFF_FFFF => 5,
        _ => 9,
    }
}

/// Append the minimal CompactSize encoding of `value` to the stream.
///
/// The encoder always chooses the narrowest form for a value, so every
/// value has exactly one valid encoding.
pub fn write_compact_size(stream: &mut DataStream, value: u64) {
    if value <= 0xFC {
        stream.write(&[value as u8]);
    } else if value <= 0xFFFF {
        stream.write(&[0xFD]);
        stream.write(&(value as u16).to_le_bytes());
    } else if value <= 0xFFFF_FFFF {
        stream.write(&[0xFE]);
        stream.write(&(value as u32).to_le_bytes());
    } else {
        stream.write(&[0xFF]);
        stream.write(&value.to_le_bytes());
    }
}

/// Decode a CompactSize from the stream, enforcing canonical form.
///
/// # Errors
///
/// - [`WireError::ReadBeyondData`] if the stream ends mid-encoding.
/// - [`WireError::NonCanonicalCompactSize`] if the value could have been
///   represented in a narrower form than the one used.
/// - [`WireError::CompactSizeTooBig`] if the value exceeds
///   [`MAX_SERIALIZED_COMPACT_SIZE`].
pub fn read_compact_size(stream: &mut DataStream) -> Result<u64, WireError> {
    let marker = stream.read_array::<1>()?[0];
    let value = match marker {
        0xFD => {
            let value = u64::from(u16::from_le_bytes(stream.read_array()?));
            if value < 0xFD {
                return Err(WireError::NonCanonicalCompactSize { value });
            }
            value
        }
        0xFE => {
            let value = u64::from(u32::from_le_bytes(stream.read_array()?));
            if value <= 0xFFFF {
                return Err(WireError::NonCanonicalCompactSize { value });
            }
            value
        }
        0xFF => {
            let value = u64::from_le_bytes(stream.read_array()?);
            if value <= 0xFFFF_FFFF {
                return Err(WireError::NonCanonicalCompactSize { value });
            }
            value
        }
        small => u64::from(small),
    };

    if value > MAX_SERIALIZED_COMPACT_SIZE {
        return Err(WireError::CompactSizeTooBig {
            value,
            max: MAX_SERIALIZED_COMPACT_SIZE,
        });
    }

    Ok(value)
}
