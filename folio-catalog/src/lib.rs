//! Filtering and search over a static portfolio project catalog.
//!
//! Load a [`Catalog`] once, then drive a [`QueryController`] from the
//! category buttons and the search box:
//!
//! ```
//! use folio_catalog::{Catalog, OrderingPolicy, QueryController};
//!
//! let catalog = Catalog::from_json(
//!     r#"[
//!         { "id": 1, "category": "frontend", "title": "Data Viz", "description": "", "technologies": ["D3.js"] },
//!         { "id": 2, "category": "fullstack", "title": "AI Studio", "description": "", "technologies": ["Node.js"] }
//!     ]"#,
//! )
//! .unwrap();
//!
//! let mut controller = QueryController::new(&catalog, OrderingPolicy::Featured);
//! controller.set_search_term("ai");
//! let results = controller.current_results();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].title.as_deref(), Some("AI Studio"));
//!
//! assert!(controller.set_category("bogus").is_err());
//! ```

pub mod catalog;
pub mod category;
pub mod controller;
pub mod error;
pub mod filter;
pub mod ids;
pub mod ordering;
pub mod query;
pub mod record;

pub use catalog::Catalog;
pub use category::Category;
pub use controller::QueryController;
pub use error::{CatalogError, MalformedReason, QueryError};
pub use filter::matches;
pub use ids::ProjectId;
pub use ordering::{order, OrderingPolicy};
pub use query::QueryState;
pub use record::{ProjectRecord, ProjectStatus, RawProjectRecord};
