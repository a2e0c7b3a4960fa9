pub mod dto;
pub mod labels;
pub mod metrics;
pub mod rollup;
pub mod view_state;

pub use dto::*;
pub use labels::*;
pub use metrics::*;
pub use rollup::*;
pub use view_state::*;
