//! Local replies used when the backend is unavailable

use crate::personality::Personality;

/// Deterministic reply for `input` in the voice of `personality`
///
/// A topic keyword in the input picks its canned answer; anything else
/// maps to one of the persona's generic lines by a stable hash, so the same
/// question always gets the same answer.
pub fn fallback_reply(personality: Personality, input: &str) -> String {
    let lowered = input.to_lowercase();

    if let Some((_, reply)) = personality
        .topics()
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
    {
        return (*reply).to_string();
    }

    let lines = personality.fallback_lines();
    let index = (fnv1a(lowered.trim().as_bytes()) % lines.len() as u64) as usize;
    lines[index].to_string()
}

/// 64-bit FNV-1a
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    bytes.iter().fold(OFFSET, |hash, &b| (hash ^ u64::from(b)).wrapping_mul(PRIME))
}
