pub mod debugger;
mod macros;

pub use debugger::{
    Component, DebugLevel, get_debug_level, init_test_tracing, init_test_tracing_from,
    init_tracing, init_tracing_from, set_debug_level,
};
