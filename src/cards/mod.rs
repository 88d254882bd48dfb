//! Card system: definitions, catalog, and hands.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for catalog cards
//! - `Powers`: The four directional power values
//! - `Card`: Immutable catalog entry
//! - `CardCatalog`: Read-only lookup loaded from a `CatalogProvider`
//! - `Hand`: Cards a seat may still place

pub mod definition;
pub mod hand;
pub mod registry;

pub use definition::{Card, CardId, Powers};
pub use hand::Hand;
pub use registry::CardCatalog;
