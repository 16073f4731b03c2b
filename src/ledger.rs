use crate::error::{Result, VendingError};
use std::collections::BTreeMap;

/// A denomination must hold strictly more than this many units for the
/// machine to consider itself able to make change.
pub const RESTOCK_THRESHOLD: u32 = 10;

/// Inventory of the coins and bills the machine holds, keyed by face value.
///
/// The key set is fixed at construction and doubles as the accepted
/// denomination set: a denomination absent from the map can be neither
/// inserted nor paid out.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Ledger {
    counts: BTreeMap<u32, u32>,
}

impl Ledger {
    pub fn new(counts: impl IntoIterator<Item = (u32, u32)>) -> Self {
        Self {
            counts: counts.into_iter().collect(),
        }
    }

    pub fn accepts(&self, denomination: u32) -> bool {
        self.counts.contains_key(&denomination)
    }

    pub fn count(&self, denomination: u32) -> u32 {
        self.counts.get(&denomination).copied().unwrap_or(0)
    }

    /// Denominations and counts, largest face value first.
    pub fn iter_desc(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.counts.iter().rev().map(|(&d, &c)| (d, c))
    }

    /// Adds `count` units of an accepted denomination.
    pub fn deposit(&mut self, denomination: u32, count: u32) -> Result<()> {
        match self.counts.get_mut(&denomination) {
            Some(held) => {
                *held += count;
                Ok(())
            }
            None => Err(VendingError::UnknownDenomination(denomination)),
        }
    }

    /// Overwrites the held count of an accepted denomination (administrative
    /// restock).
    pub fn set_count(&mut self, denomination: u32, count: u32) -> Result<()> {
        match self.counts.get_mut(&denomination) {
            Some(held) => {
                *held = count;
                Ok(())
            }
            None => Err(VendingError::UnknownDenomination(denomination)),
        }
    }

    /// Removes an already-validated payout from the inventory. Callers must
    /// only pass breakdowns computed against the current counts.
    pub(crate) fn pay_out(&mut self, breakdown: &BTreeMap<u32, u32>) {
        for (denomination, count) in breakdown {
            if let Some(held) = self.counts.get_mut(denomination) {
                *held = held.saturating_sub(*count);
            }
        }
    }

    /// True when at least one denomination is stocked above the restock
    /// threshold.
    pub fn can_make_change(&self) -> bool {
        self.counts.values().any(|&count| count > RESTOCK_THRESHOLD)
    }
}
