//! TUI view components
//!
//! Each component renders one part of the interface from borrowed state;
//! none of them own or mutate application state beyond scroll offsets.

mod footer;
mod header;
pub mod helpers;
mod input;
pub mod page_status;
pub mod resource_status;
mod results;
mod yaml;

pub use footer::*;
pub use header::*;
pub use input::*;
pub use page_status::{page_status_lines, render_page_status};
pub use resource_status::{resource_status_line, status_icon};
pub use results::*;
pub use yaml::*;
