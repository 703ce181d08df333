pub mod console;
pub mod tablefmt;

pub use console::Console;
