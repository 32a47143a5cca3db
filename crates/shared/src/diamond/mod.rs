pub mod cut;
pub mod error;
pub mod remove;

pub use cut::{FacetCut, FacetCutAction};
pub use error::RemovalError;
pub use remove::{
    plan_removal, removal_cut, remove_facet, CutExecutor, CutReceipt, RemovalConfig,
    SelectorSource, SubmittedCut,
};
