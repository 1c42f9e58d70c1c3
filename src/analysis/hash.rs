//! Transcript content hashing.
//!
//! A DJB2-style rolling hash over every turn's identifying fields. Fast,
//! order-sensitive and deterministic; collisions are tolerable because the
//! hash only gates a cache, it never addresses content.

use crate::transcript::TranscriptTurn;

/// Prefix of every rendered transcript hash.
pub const HASH_PREFIX: &str = "itl-";

const SEED: u32 = 5381;
const FIELD_SEP: char = '|';
const TURN_SEP: char = '\u{1f}';

/// Hash a transcript's content into a fixed-width hex string.
///
/// Any change to any turn's id, role, content, timestamps or duration
/// changes the hash; byte-identical transcripts always hash the same.
pub fn transcript_hash(turns: &[TranscriptTurn]) -> String {
    let mut hash = SEED;
    for turn in turns {
        let record = format!(
            "{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}{turn_sep}",
            turn.id,
            role_tag(turn),
            turn.content,
            turn.timestamp_ms.map(fmt_num).unwrap_or_default(),
            turn.created_at.as_deref().unwrap_or_default(),
            turn.answer_duration_sec.map(fmt_num).unwrap_or_default(),
            sep = FIELD_SEP,
            turn_sep = TURN_SEP,
        );
        for byte in record.bytes() {
            hash = hash.wrapping_mul(33) ^ u32::from(byte);
        }
    }
    format!("{}{:08x}", HASH_PREFIX, hash)
}

/// Check that a string has the shape produced by [`transcript_hash`].
pub fn is_well_formed(hash: &str) -> bool {
    hash.strip_prefix(HASH_PREFIX)
        .is_some_and(|hex| hex.len() == 8 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

fn role_tag(turn: &TranscriptTurn) -> &'static str {
    use crate::transcript::Role;
    match turn.role {
        Role::Assistant => "assistant",
        Role::User => "user",
        Role::Other => "other",
    }
}

/// Render an optional numeric field without introducing float noise for
/// integral values.
fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
