//! FNV-1a 64-bit hashing used to turn seed strings (and data) into seeds

/// FNV-1a 64-bit offset basis
pub const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a 64-bit prime
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

#[inline]
fn absorb(hash: u64, byte: u8) -> u64 {
    (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
}

/// Hash the UTF-8 bytes of a string
pub fn fnv1a_hash(s: &str) -> u64 {
    fnv1a_bytes(s.as_bytes())
}

/// Hash a byte slice
pub fn fnv1a_bytes(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &b| absorb(hash, b))
}

/// Hash the little-endian IEEE-754 bytes of every value in order
///
/// Lets a seed be derived from the data itself, so identical samples always
/// resample identically.
pub fn hash_f64_slice(values: &[f64]) -> u64 {
    values
        .iter()
        .flat_map(|v| v.to_bits().to_le_bytes())
        .fold(FNV_OFFSET_BASIS, absorb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_offset_basis() {
        assert_eq!(fnv1a_hash(""), FNV_OFFSET_BASIS);
        assert_eq!(hash_f64_slice(&[]), FNV_OFFSET_BASIS);
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(fnv1a_hash("a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(fnv1a_hash("ab"), 0x089c_4407_b545_986a);
        assert_eq!(fnv1a_hash("abc"), 0xe71f_a219_0541_574b);
        assert_eq!(fnv1a_hash("demo-uniform"), 0xbd53_3074_9e7c_f44f);
    }

    #[test]
    fn test_f64_slice_matches_byte_hash() {
        let values: [f64; 3] = [1.5, -2.25, 0.0];
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        assert_eq!(hash_f64_slice(&values), fnv1a_bytes(&bytes));
    }

    #[test]
    fn test_f64_slice_order_sensitive() {
        assert_ne!(hash_f64_slice(&[1.0, 2.0]), hash_f64_slice(&[2.0, 1.0]));
        // Signed zeros have different bit patterns
        assert_ne!(hash_f64_slice(&[0.0]), hash_f64_slice(&[-0.0]));
    }
}
