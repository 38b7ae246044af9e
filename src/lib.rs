pub mod terminal;

pub use terminal::{monitor_stdin, TerminalPeripheral};
