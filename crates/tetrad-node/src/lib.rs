//! Tetrad Node - Shared Coordinator Handle
//!
//! Wraps one [`tetrad_protocols::Coordinator`] for use from async code.
//!
//! # Architecture
//!
//! - **Config**: [`NodeConfig`] read from `TETRAD_*` environment variables
//! - **Node**: [`TetradNode`], a cloneable handle over one `RwLock`
//! - **Report**: [`Report`], the JSON summary the binary prints
//!
//! # Example
//!
//! ```no_run
//! use tetrad_node::{NodeConfig, TetradNode};
//!
//! #[tokio::main]
//! async fn main() -> tetrad_node::Result<()> {
//!     let node = TetradNode::new(&NodeConfig::from_env()?);
//!     node.send("A", "B", "hello").await?;
//!     println!("{}", node.coherence().await);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod node;
pub mod report;

pub use config::NodeConfig;
pub use error::{Error, Result};
pub use node::TetradNode;
pub use report::Report;
