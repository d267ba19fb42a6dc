// Common test utilities and fixtures

pub mod fixtures;

// Re-export commonly used items
// Note: Not every test binary uses every helper
#[allow(unused_imports)]
pub use fixtures::{seed_produce_tree, TreeFixture, PRODUCE_NODES};
#[allow(unused_imports)]
pub use helpers::{create_test_services, create_test_store, request};
