//! Status macros shared by every crate in the workspace.
//!
//! They forward to `tracing` under the [`STATUS_TARGET`] target. The CLI
//! formatter keys its `[+]` / `[*]` / `[-]` symbols off the level, and
//! uses the target to tell a successful outcome apart from plain output.

#[doc(hidden)]
pub use tracing as __tracing;

pub const STATUS_TARGET: &str = "shapes::status";
pub const SUCCESS_TARGET: &str = "shapes::success";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log::__tracing::warn!(target: $crate::log::STATUS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log::__tracing::error!(target: $crate::log::STATUS_TARGET, $($arg)*)
    };
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
