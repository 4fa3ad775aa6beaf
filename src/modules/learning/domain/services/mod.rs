pub mod progress_calculator;
pub mod status_machine;

pub use progress_calculator::ProgressCalculator;
pub use status_machine::{StatusMachine, TransitionPolicy, DEFAULT_TRANSITION_POLICY};
