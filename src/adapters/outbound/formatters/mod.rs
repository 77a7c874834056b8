/// Formatters for the export output
mod json_formatter;

pub use json_formatter::JsonFormatter;
