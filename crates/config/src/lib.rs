pub mod env;
pub mod tracing_init;

pub use env::WidgetConfig;
pub use tracing_init::init_tracing;
