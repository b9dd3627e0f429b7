static LUT_DATA: [u8; 16] = *b"0123456789abcdef";

/// Encode input bytes as lowercase hex, two digits per byte, high nibble first.
pub fn encode(input: &[u8]) -> String {
    let mut output = Vec::with_capacity(input.len() * 2);
    for &byte in input {
        output.push(LUT_DATA[(byte >> 4) as usize]);
        output.push(LUT_DATA[(byte & 0x0f) as usize]);
    }
    // LUT_DATA is ASCII
    unsafe { String::from_utf8_unchecked(output) }
}
