use log::Level;

/// Component-tagged logging on top of the `log` facade.
///
/// The component name becomes the log target so the browser console (via
/// `wasm-logger`) shows which part of the UI emitted the line.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, component, message);
    }

    fn log(level: Level, component: &str, message: &str) {
        log::log!(target: component, level, "{}", message);
    }
}
