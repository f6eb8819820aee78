use proptest::prelude::*;
use proptest::strategy::ValueTree;
use proptest::test_runner::TestRunner;

use catalog_products::{Category, Price, Product};

const NAMES: [&str; 11] = [
    "Hat", "Pants", "Shirt", "Apple", "Banana", "Pots", "Towels", "Ford", "Chevy", "Hammer",
    "Wrench",
];

/// Random valid, unpersisted products (price 0.50 to 2000.00).
pub fn product_strategy() -> impl Strategy<Value = Product> {
    (
        proptest::sample::select(NAMES.to_vec()),
        "[A-Z][a-z]{2,9}( [a-z]{2,9}){3,10}\\.",
        50i64..=200_000,
        any::<bool>(),
        proptest::sample::select(Category::ALL.to_vec()),
    )
        .prop_map(|(name, description, cents, available, category)| {
            Product::new(name, description, Price::from_cents(cents), available, category)
        })
}

/// Draws products from [`product_strategy`] with a fixed seed, so every
/// run of a test sees the same sequence.
pub struct ProductFactory {
    runner: TestRunner,
}

impl ProductFactory {
    pub fn new() -> Self {
        Self {
            runner: TestRunner::deterministic(),
        }
    }

    pub fn build(&mut self) -> Product {
        product_strategy()
            .new_tree(&mut self.runner)
            .expect("product strategy has no filters")
            .current()
    }

    pub fn build_batch(&mut self, size: usize) -> Vec<Product> {
        (0..size).map(|_| self.build()).collect()
    }
}

impl Default for ProductFactory {
    fn default() -> Self {
        Self::new()
    }
}
