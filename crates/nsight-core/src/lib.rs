//! Core pipeline for the nsight tools: the hierarchy assembler, the flat
//! CSV cache store, and the export driver that ties them together.
//!
//! The assembler builds the nested client → site → {servers, workstations}
//! tree from one of two interchangeable sources -- live API calls or a
//! previously written cache -- through the [`source::InventorySource`]
//! capability trait, applying identical normalization in both modes. A
//! live run streams every fetched record into the cache store as a side
//! effect, so a reloadable cache always exists afterwards.

pub mod assemble;
pub mod convert;
pub mod error;
pub mod export;
pub mod source;
pub mod store;
pub mod tree;

pub use assemble::assemble;
pub use error::CoreError;
pub use export::{ExportMode, ExportOptions, run_export};
pub use source::{CacheSource, InventorySource, LiveSource};
pub use tree::{ClientNode, ServerNode, SiteNode, WorkstationNode};
