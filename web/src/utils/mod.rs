pub mod class_name;
pub mod last_callback;
pub mod show_transition;
pub mod timer;

pub use class_name::build_class_name;
pub use last_callback::LastCallback;
pub use show_transition::{ShowTransition, TransitionState, TransitionTimings};
pub use timer::{BrowserScheduler, Scheduler, TimerError, TimerHandle};
