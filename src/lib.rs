pub mod adjacency;
pub mod analysis;
pub mod config;
pub mod contacts;
pub mod error;
pub mod gexf;
pub mod logging;
pub mod node_identification;
pub mod output;
pub mod popularity;
pub mod registry;
pub mod report;
pub mod sanitize;

pub use analysis::ContactBookAnalysis;
pub use config::RenderConfig;
pub use error::{GraphError, GraphResult};
