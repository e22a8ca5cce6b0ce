#![warn(missing_docs)]

//! step2stl - STEP to STL mesh conversion
//!
//! Resolves an input STEP file and an output STL file relative to the
//! directory the tool lives in, then hands the geometry work to a
//! [`GeometryKernel`]. The default kernel is backed by the pure-Rust
//! truck crates (behind the `truck` feature).
//!
//! # Example
//!
//! ```rust,no_run
//! use step2stl::{convert, ConvertConfig, TruckKernel};
//!
//! let config = ConvertConfig::new("bracket.step", "stl/bracket.stl");
//! let report = convert(&TruckKernel::new(), &config, |_| {}).unwrap();
//! println!("wrote {}", report.output.display());
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod kernel;
pub mod paths;

pub use config::{ConvertConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
pub use convert::{convert, convert_from, ConvertEvent, ConvertReport};
pub use error::{ConvertError, KernelError};
pub use kernel::{
    GeometryKernel, MeshTolerances, DEFAULT_ANGULAR_TOLERANCE, DEFAULT_LINEAR_TOLERANCE,
};

#[cfg(feature = "truck")]
pub use kernel::{StepModel, TruckKernel};
