//! Next-code suggestion for new spaces.
//!
//! Codes look like `A-001`: a zone prefix letter, a dash, and a zero-padded
//! sequence number. The suggestion scans the current snapshot for the
//! highest existing suffix under the prefix and proposes the next one. The
//! server may still reassign — the create response is canonical.

use crate::model::Space;

const PAD_WIDTH: usize = 3;

/// Suggest the next code for `prefix`, e.g. `A-002` when `A-001` is the
/// highest existing code. `<prefix>-001` when no code under the prefix
/// parses; codes that don't match `<prefix>-<digits>` are ignored.
pub fn next_code(prefix: char, spaces: &[Space]) -> String {
    let prefix = prefix.to_ascii_uppercase();
    let next = spaces
        .iter()
        .filter_map(|s| suffix_number(&s.code, prefix))
        .max()
        .map_or(1, |n| n.saturating_add(1));

    format!("{prefix}-{next:0width$}", width = PAD_WIDTH)
}

/// Parse the numeric suffix out of `<prefix>-<digits>`; `None` for
/// anything else.
fn suffix_number(code: &str, prefix: char) -> Option<u32> {
    let rest = code.strip_prefix(prefix)?.strip_prefix('-')?;
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    rest.parse().ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn space_with_code(code: &str) -> Space {
        Space {
            id: Uuid::new_v4(),
            code: code.into(),
            zone_id: Uuid::new_v4(),
            status: crate::model::SpaceStatus::Available,
            reserved: false,
            priority: 5,
        }
    }

    fn spaces(codes: &[&str]) -> Vec<Space> {
        codes.iter().map(|c| space_with_code(c)).collect()
    }

    #[test]
    fn first_code_is_001() {
        assert_eq!(next_code('A', &[]), "A-001");
    }

    #[test]
    fn generation_is_monotonic() {
        let codes: Vec<String> = (1..=99).map(|n| format!("A-{n:03}")).collect();
        let refs: Vec<&str> = codes.iter().map(String::as_str).collect();
        assert_eq!(next_code('A', &spaces(&refs)), "A-100");
    }

    #[test]
    fn highest_suffix_wins_regardless_of_order() {
        assert_eq!(next_code('A', &spaces(&["A-007", "A-002", "A-005"])), "A-008");
    }

    #[test]
    fn other_prefixes_are_ignored() {
        assert_eq!(next_code('A', &spaces(&["B-040", "A-002"])), "A-003");
    }

    #[test]
    fn malformed_codes_are_ignored() {
        let s = spaces(&["A-", "A-xyz", "garage-1", "A12", "A-004"]);
        assert_eq!(next_code('A', &s), "A-005");
    }

    #[test]
    fn only_malformed_codes_restart_the_sequence() {
        assert_eq!(next_code('A', &spaces(&["??", "A_9"])), "A-001");
    }

    #[test]
    fn suffix_can_outgrow_the_padding() {
        assert_eq!(next_code('A', &spaces(&["A-999"])), "A-1000");
    }

    #[test]
    fn lowercase_prefix_is_normalized() {
        assert_eq!(next_code('b', &spaces(&["B-009"])), "B-010");
    }
}
