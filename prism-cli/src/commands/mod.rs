pub mod config;
pub mod describe;
pub mod translate;

pub use config::run_config;
pub use describe::run_describe;
pub use translate::{run_translate, TranslateArgs};
