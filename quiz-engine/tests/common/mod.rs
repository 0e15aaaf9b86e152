pub mod mock_bot;
pub mod failing_store;
