pub mod builtins;
pub mod closure;
pub mod driver;
pub mod errors;
pub mod exceptions;
pub mod frame;
pub mod heap;
pub mod invoke;
pub mod site;
pub mod value;
