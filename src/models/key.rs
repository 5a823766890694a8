//! Block key generation

use uuid::Uuid;

const KEY_ALPHABET: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv";

/// Generate a short random key not rejected by `taken`
pub fn generate_key(taken: impl Fn(&str) -> bool) -> String {
    loop {
        let key = encode(random_u24());
        if !taken(&key) {
            return key;
        }
    }
}

/// 24 random bits from a v4 UUID
fn random_u24() -> u32 {
    let bytes = Uuid::new_v4().into_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0])
}

fn encode(mut value: u32) -> String {
    let mut out = Vec::with_capacity(5);
    loop {
        out.push(KEY_ALPHABET[(value % 32) as usize]);
        value /= 32;
        if value == 0 {
            break;
        }
    }
    out.reverse();
    out.into_iter().map(char::from).collect()
}
