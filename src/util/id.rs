use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static NEXT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Generate an opaque task ID: base-36 timestamp plus a base-36 entropy tail.
///
/// The tail mixes sub-second nanos with a process-local counter, so IDs are
/// unique even when several tasks are created in the same millisecond (the
/// seed tasks are).
pub fn generate_id() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let seq = NEXT_SEQ.fetch_add(1, Ordering::Relaxed);
    let entropy = u64::from(now.subsec_nanos()) ^ seq.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    format!(
        "{}{}",
        to_base36(now.as_millis()),
        to_base36(u128::from(entropy))
    )
}

fn to_base36(mut n: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
