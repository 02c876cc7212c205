pub mod events;
pub mod run;

pub use events::DestructionEvent;
pub use run::{run_invasion, InvasionConfig, InvasionOutcome, STEP_CEILING};
