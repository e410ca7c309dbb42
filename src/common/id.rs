use chrono::Utc;
use rand::RngExt;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random suffix of a block id.
const SUFFIX_LEN: usize = 9;

/// Generate a block/note id of the form `<epoch-millis>-<9 base36 chars>`.
pub fn generate_id() -> String {
    let mut rng = rand::rng();
    let mut bits = rng.random::<u64>();

    let mut out = itoa::Buffer::new().format(now_millis()).to_string();
    out.reserve(SUFFIX_LEN + 1);
    out.push('-');
    for _ in 0..SUFFIX_LEN {
        out.push(BASE36[(bits % 36) as usize] as char);
        bits /= 36;
    }
    out
}

/// Current time as epoch milliseconds.
#[inline]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
