/// One-at-a-time string hash, matching the client runtime's native
/// `String.hashCode`.
///
/// Each character's code point is mixed into a wrapping 32-bit accumulator,
/// followed by a final avalanche. The unsigned result is reinterpreted as a
/// signed 32-bit integer.
pub fn string_hash(input: &str) -> i32 {
    let mut h: u32 = 0;
    for c in input.chars() {
        h = h.wrapping_add(c as u32);
        h = h.wrapping_add(h << 10);
        h ^= h >> 6;
    }
    h = h.wrapping_add(h << 3);
    h ^= h >> 11;
    h = h.wrapping_add(h << 15);
    h as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_hashes_to_zero() {
        assert_eq!(string_hash(""), 0);
    }

    #[test]
    fn high_bit_maps_to_negative() {
        assert_eq!(string_hash("a"), -902917054);
    }

    #[test]
    fn non_ascii_uses_code_points() {
        assert_eq!(string_hash("ñ"), 394112695);
        assert_eq!(string_hash("🙏"), 1025371740);
    }
}
