pub mod fetch;
pub mod output;
pub mod process;
