pub mod logging;
pub mod stop;
