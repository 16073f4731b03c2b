use crate::catalog::Catalog;
use crate::change::{Breakdown, make_change};
use crate::error::{Result, VendingError};
use crate::ledger::Ledger;

/// Coarse machine-health signal derived from catalog and ledger state.
///
/// This is not per-product availability; that is [`VendingMachine::can_purchase`],
/// evaluated per slot.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MachineStatus {
    /// The first catalog slot is empty: the machine is unconfigured.
    NoProduct,
    /// No denomination is stocked above the restock threshold.
    NoChange,
    Selling,
}

impl MachineStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MachineStatus::NoProduct => "no product",
            MachineStatus::NoChange => "no change available",
            MachineStatus::Selling => "selling",
        }
    }

    pub fn vending_enabled(&self) -> bool {
        matches!(self, MachineStatus::Selling)
    }
}

/// The transactional core of one vending machine.
///
/// Owns the customer balance, cumulative sales, and the catalog and coin
/// ledger it trades against. Single-threaded by design: every operation runs
/// to completion, and callers exposing an instance to concurrent clients
/// must serialize access around it.
pub struct VendingMachine {
    balance: u32,
    total_sales: u64,
    catalog: Catalog,
    ledger: Ledger,
}

impl VendingMachine {
    pub fn new(catalog: Catalog, ledger: Ledger) -> Self {
        Self {
            balance: 0,
            total_sales: 0,
            catalog,
            ledger,
        }
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn total_sales(&self) -> u64 {
        self.total_sales
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mutable catalog access for administrative restock.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Overwrites the held count of one denomination (administrative
    /// restock of the coin reserve).
    pub fn set_coin_count(&mut self, denomination: u32, count: u32) -> Result<()> {
        self.ledger.set_count(denomination, count)
    }

    /// Sets the remaining stock of an occupied slot (administrative
    /// restock). Returns `false` for empty or out-of-range slots.
    pub fn restock(&mut self, slot: usize, stock: u32) -> bool {
        match self.catalog.get_mut(slot).and_then(|slot| slot.product_mut()) {
            Some(product) => {
                product.stock = stock;
                true
            }
            None => false,
        }
    }

    /// Accepts a batch of coins and credits the balance.
    ///
    /// All-or-nothing: if any denomination in the batch is not accepted by
    /// the ledger, the whole call is rejected and neither the balance nor
    /// the ledger changes. Returns the new balance on success.
    pub fn insert_money(&mut self, amounts: &Breakdown) -> Result<u32> {
        if let Some((&denomination, _)) = amounts
            .iter()
            .find(|(denomination, _)| !self.ledger.accepts(**denomination))
        {
            return Err(VendingError::UnknownDenomination(denomination));
        }
        for (&denomination, &count) in amounts {
            self.ledger.deposit(denomination, count)?;
            self.balance += denomination * count;
        }
        Ok(self.balance)
    }

    /// True iff the slot holds a priced, stocked product the current balance
    /// covers. A price of zero marks a placeholder slot and is never
    /// purchasable.
    pub fn can_purchase(&self, slot: usize) -> bool {
        match self.catalog.get(slot).and_then(|slot| slot.product()) {
            Some(product) => {
                self.balance >= product.price && product.stock > 0 && product.price != 0
            }
            None => false,
        }
    }

    /// Vends one unit from the slot. Returns `false` without touching any
    /// state when the purchase is ineligible.
    pub fn purchase(&mut self, slot: usize) -> bool {
        if !self.can_purchase(slot) {
            return false;
        }
        // can_purchase guarantees an occupied slot with stock.
        if let Some(product) = self.catalog.get_mut(slot).and_then(|slot| slot.product_mut()) {
            self.balance -= product.price;
            product.stock -= 1;
            self.total_sales += u64::from(product.price);
            return true;
        }
        false
    }

    /// Pays the balance back in coins.
    ///
    /// On success the returned breakdown sums to the old balance, the ledger
    /// loses those coins, and the balance resets to zero. When the ledger
    /// cannot express the balance exactly, an empty breakdown is returned
    /// and both the balance and the ledger are left untouched, so the
    /// customer's credit is preserved.
    pub fn refund(&mut self) -> Breakdown {
        match make_change(self.balance, &self.ledger) {
            Some(breakdown) => {
                self.ledger.pay_out(&breakdown);
                self.balance = 0;
                breakdown
            }
            None => Breakdown::new(),
        }
    }

    /// Recomputed from catalog and ledger state on every call.
    pub fn status(&self) -> MachineStatus {
        let unconfigured = self.catalog.get(0).is_none_or(|slot| slot.is_empty());
        if unconfigured {
            return MachineStatus::NoProduct;
        }
        if !self.ledger.can_make_change() {
            return MachineStatus::NoChange;
        }
        MachineStatus::Selling
    }
}
