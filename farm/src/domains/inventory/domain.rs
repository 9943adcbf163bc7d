use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemKey(pub usize);

#[derive(Debug)]
pub struct ItemKind {
    pub id: ItemKey,
    pub name: String,
    /// Sell-only items have no buy price.
    pub buy_price: Option<u32>,
    pub sell_price: u32,
}

#[derive(Default)]
pub struct InventoryDomain {
    pub money: u32,
    pub items: HashMap<ItemKey, u32>,
    pub selected: Option<ItemKey>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inventory {
    ItemQuantityChanged { item: ItemKey, quantity: u32 },
    MoneyChanged { money: u32 },
    ItemSelected { item: ItemKey },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryError {
    NotEnoughItems {
        item: ItemKey,
        available: u32,
        required: u32,
    },
    NotEnoughMoney {
        available: u32,
        required: u32,
    },
    ItemQuantityOverflow {
        item: ItemKey,
    },
    MoneyOverflow,
    ItemNotPurchasable {
        item: ItemKey,
    },
}
