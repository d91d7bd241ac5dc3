//! IPOG t-way covering array generation.
//!
//! The search loop (π, coverage evaluation, horizontal/vertical extension)
//! implements the IPOG strategy (Lei, Kacker, Kuhn, Okun, Lawrence, 2007).
//! `driver` ties the pieces together behind a single `generate` entry point;
//! `checker` independently verifies the result.

pub mod bitmap;
pub mod checker;
pub mod coverage;
pub mod driver;
pub mod dump;
pub mod error;
pub mod horizontal;
pub mod index;
pub mod pi;
pub mod random;
pub mod row;
pub mod vertical;

pub use checker::check;
pub use driver::{generate, CoveringArray};
pub use dump::dump;
pub use error::CoveringArrayError;
pub use row::Cell;
