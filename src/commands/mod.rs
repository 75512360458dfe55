mod changes;
pub mod check;
mod context;
pub mod init;
pub mod review;

pub use check::{run_check, run_check_impl};
pub use context::{CheckContext, FileReader, RealFileReader};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use review::{run_review, run_review_impl};
