pub mod clock;
pub mod stopwatch;
pub mod timer;
