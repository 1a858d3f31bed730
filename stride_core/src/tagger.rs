//! Superset and warmup tagging for exercise rows.

use crate::patterns::{NUMBERED_CONTINUATION, SUPERSET_CODE};
use crate::types::{SupersetTag, WarmupType};

/// Superset membership from the first-column code
///
/// `A1` → superset `A`, order 1. The letter is upper-cased; an order of zero
/// or one that does not fit in a `u32` is not a superset.
pub fn superset_tag(code: &str) -> Option<SupersetTag> {
    let caps = SUPERSET_CODE.captures(code.trim())?;
    let id = caps[1].chars().next()?.to_ascii_uppercase();
    let order: u32 = caps[2].parse().ok()?;
    (order > 0).then_some(SupersetTag { id, order })
}

/// Warmup type carried from the most recent section marker
///
/// A warmup block is the run of rows right after its marker. Once a numbered
/// list (`1.`, `2. Cat-Cow`) has started, the first row without a number is
/// outside the block. When the block does not use numbering at all, only the
/// row directly after the marker belongs to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WarmupCarry {
    current: WarmupType,
    numbered: bool,
}

impl WarmupCarry {
    pub fn current(&self) -> WarmupType {
        self.current
    }

    /// A section marker opens a new block
    pub fn open(&mut self, warmup: WarmupType) {
        self.current = warmup;
        self.numbered = false;
    }

    pub fn reset(&mut self) {
        self.current = WarmupType::None;
        self.numbered = false;
    }

    /// Warmup type for an exercise row, advancing the carry
    pub fn tag(&mut self, code: &str, name: &str) -> WarmupType {
        let tagged = self.current;
        if !tagged.is_warmup() {
            return WarmupType::None;
        }

        if continues_numbering(code) || continues_numbering(name) {
            self.numbered = true;
            return tagged;
        }

        let inside = !self.numbered;
        tracing::debug!("Warmup block '{}' ends at {:?}", tagged, name);
        self.reset();
        if inside {
            tagged
        } else {
            WarmupType::None
        }
    }
}

fn continues_numbering(text: &str) -> bool {
    NUMBERED_CONTINUATION.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superset_tag() {
        assert_eq!(superset_tag("A1"), Some(SupersetTag { id: 'A', order: 1 }));
        assert_eq!(superset_tag(" b2 "), Some(SupersetTag { id: 'B', order: 2 }));
        assert_eq!(superset_tag("C12"), Some(SupersetTag { id: 'C', order: 12 }));
    }

    #[test]
    fn test_non_superset_codes() {
        assert_eq!(superset_tag("Plank"), None);
        assert_eq!(superset_tag("1."), None);
        assert_eq!(superset_tag("A0"), None);
        assert_eq!(superset_tag("A99999999999"), None);
        assert_eq!(superset_tag(""), None);
    }

    #[test]
    fn test_no_carry_means_no_warmup() {
        let mut carry = WarmupCarry::default();
        assert_eq!(carry.tag("1.", "Cat-Cow"), WarmupType::None);
        assert_eq!(carry.current(), WarmupType::None);
    }

    #[test]
    fn test_numbered_rows_continue_block() {
        let mut carry = WarmupCarry::default();
        carry.open(WarmupType::Primers);

        assert_eq!(carry.tag("1.", "Cat-Cow"), WarmupType::Primers);
        assert_eq!(carry.tag("x", "2. Hip Circles"), WarmupType::Primers);
        assert_eq!(carry.current(), WarmupType::Primers);
    }

    #[test]
    fn test_unnumbered_row_after_list_ends_block() {
        let mut carry = WarmupCarry::default();
        carry.open(WarmupType::Primers);

        assert_eq!(carry.tag("1.", "Cat-Cow"), WarmupType::Primers);
        assert_eq!(carry.tag("2.", "Hip Circles"), WarmupType::Primers);
        assert_eq!(carry.tag("A1", "Squat"), WarmupType::None);
        assert_eq!(carry.tag("A2", "Lunge"), WarmupType::None);
    }

    #[test]
    fn test_unnumbered_block_keeps_only_first_row() {
        let mut carry = WarmupCarry::default();
        carry.open(WarmupType::Switch);

        assert_eq!(carry.tag("Glute Bridge", "Glute Bridge"), WarmupType::Switch);
        assert_eq!(carry.tag("A1", "Squat"), WarmupType::None);
    }

    #[test]
    fn test_reset() {
        let mut carry = WarmupCarry::default();
        carry.open(WarmupType::Primers);
        carry.reset();
        assert_eq!(carry.current(), WarmupType::None);
    }
}
