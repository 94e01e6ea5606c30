// src/debugger/macros.rs

#[macro_export]
macro_rules! db_log {
    ($level:expr, $component:expr, $($arg:tt)*) => {
        if $crate::debugger::debugger::should_log($level) {
            match $level {
                $crate::debugger::debugger::DebugLevel::Error => {
                    ::tracing::error!(component = %$component, $($arg)*)
                }
                $crate::debugger::debugger::DebugLevel::Warn => {
                    ::tracing::warn!(component = %$component, $($arg)*)
                }
                $crate::debugger::debugger::DebugLevel::Info => {
                    ::tracing::info!(component = %$component, $($arg)*)
                }
                $crate::debugger::debugger::DebugLevel::Debug => {
                    ::tracing::debug!(component = %$component, $($arg)*)
                }
                $crate::debugger::debugger::DebugLevel::Trace => {
                    ::tracing::trace!(component = %$component, $($arg)*)
                }
                $crate::debugger::debugger::DebugLevel::Off => {}
            }
        }
    };
}

#[macro_export]
macro_rules! db_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::db_log!($crate::debugger::debugger::DebugLevel::Error, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! db_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::db_log!($crate::debugger::debugger::DebugLevel::Warn, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! db_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::db_log!($crate::debugger::debugger::DebugLevel::Info, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! db_debug {
    ($component:expr, $($arg:tt)*) => {
        $crate::db_log!($crate::debugger::debugger::DebugLevel::Debug, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! db_trace {
    ($component:expr, $($arg:tt)*) => {
        $crate::db_log!($crate::debugger::debugger::DebugLevel::Trace, $component, $($arg)*)
    };
}
