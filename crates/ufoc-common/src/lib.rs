pub mod message;
pub mod source;

pub use driver::Driver;

mod driver;
