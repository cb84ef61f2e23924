//! # cpp-mockgen
//!
//! A CLI tool and library for generating Google Mock classes from C++
//! interface headers.
//!
//! This crate parses C++ headers, discovers abstract interface types
//! (classes exposing only pure virtual methods, possibly through
//! multi-level inheritance) and generates:
//! - **Mock classes** with one `MOCK_METHOD` macro line per pure virtual
//!   method, inherited methods included.
//! - **Forwarding operator definitions** for operator overloads, which the
//!   mocking macros cannot name directly.
//!
//! Signatures are reconstructed from raw declaration tokens because the
//! syntax tree does not expose a ready-made signature string; namespace
//! nesting and class templates are carried into the generated code.
//!
//! ## Usage
//!
//! Although primarily used as a CLI tool, you can also use it as a library:
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use cpp_mockgen::config::Config;
//! use cpp_mockgen::generator::GenerationContext;
//! use cpp_mockgen::pipeline::Pipeline;
//!
//! fn main() -> anyhow::Result<()> {
//!     let pipeline = Pipeline::new(
//!         Config::default_config(),
//!         PathBuf::from("generated"),
//!         String::new(),
//!         vec![],
//!         GenerationContext::now(),
//!         false,
//!     );
//!     pipeline.run(&[PathBuf::from("include/IWidget.hpp")])?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod generator;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod resolver;
