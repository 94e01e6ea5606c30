pub mod data;
pub mod harness;
pub mod storage;

use std::sync::Once;

use helium_exec::{config::EngineConfig, debugger::init_test_tracing_from};

#[allow(dead_code)]
static INIT: Once = Once::new();

/// Installs test logging once, at the level `HELIUM_DEBUG` asks for.
#[allow(dead_code)]
pub fn init_debug_for_tests() {
    INIT.call_once(|| {
        let config = EngineConfig::from_env().unwrap_or_default();
        init_test_tracing_from(&config);
    });
}
