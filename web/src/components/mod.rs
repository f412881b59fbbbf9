pub mod button;

// Re-export commonly used types
pub use button::{Button, ButtonConfig, ButtonKind};
