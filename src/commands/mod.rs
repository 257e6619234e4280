//! Command implementations

pub mod count;
pub mod generate;
pub mod input;
pub mod interactive;

pub use count::{CountConfig, CountResult, count_top};
pub use generate::{CloudSummary, GenerateConfig, build_cloud, generate, render_counted};
pub use input::{CountedInput, count_file, count_reader};
pub use interactive::run_interactive;
