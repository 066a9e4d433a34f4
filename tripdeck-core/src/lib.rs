pub mod places;
pub mod types;
pub mod weather;

// Keep the public surface small and intentional.
pub use places::*;
pub use types::*;
pub use weather::*;
