use crate::ledger::Ledger;
use std::collections::BTreeMap;

/// Breakdown of an amount into denomination counts.
pub type Breakdown = BTreeMap<u32, u32>;

/// Expresses `target` exactly using the coins currently held in `ledger`.
///
/// Greedy over descending denominations: each step takes as many units of
/// the largest remaining face value as the remainder and the inventory
/// allow. If a remainder is left after the smallest denomination, the
/// attempt fails and `None` is returned; there is no backtracking, so for
/// non-canonical denomination sets this can miss combinations a full search
/// would find. That matches the machine's historical payout behavior and is
/// exact for canonical sets such as 1000/500/100/50.
pub fn make_change(target: u32, ledger: &Ledger) -> Option<Breakdown> {
    let mut remainder = target;
    let mut breakdown = Breakdown::new();
    for (denomination, held) in ledger.iter_desc() {
        let count = (remainder / denomination).min(held);
        if count > 0 {
            breakdown.insert(denomination, count);
            remainder -= denomination * count;
        }
    }
    if remainder != 0 {
        return None;
    }
    Some(breakdown)
}
