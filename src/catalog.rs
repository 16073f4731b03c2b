use serde::{Deserialize, Serialize};

/// Number of slots in the reference machine configuration.
pub const DEFAULT_SLOT_CAPACITY: usize = 15;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Product {
    pub name: String,
    pub price: u32,
    pub stock: u32,
    /// Opaque image path shown by the shell; never interpreted here.
    pub image: String,
}

impl Product {
    pub fn new(name: impl Into<String>, price: u32, stock: u32, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
            image: image.into(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(Product),
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn product(&self) -> Option<&Product> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(product) => Some(product),
        }
    }

    pub fn product_mut(&mut self) -> Option<&mut Product> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(product) => Some(product),
        }
    }
}

/// Fixed-capacity rack of product slots. Slots are created once at machine
/// initialization and mutated in place; the capacity never changes during a
/// session.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Catalog {
    slots: Vec<Slot>,
}

impl Catalog {
    /// An all-empty catalog of `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Slot::Empty; capacity],
        }
    }

    pub fn from_slots(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    pub fn stock(&mut self, index: usize, product: Product) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Slot::Occupied(product);
        }
    }
}
