mod error;
mod homework;

pub use error::PollError;
pub use homework::{Homework, HomeworkStatus, StatusChange};
