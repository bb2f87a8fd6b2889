pub mod foobot;
pub mod metric;
pub mod platform;
