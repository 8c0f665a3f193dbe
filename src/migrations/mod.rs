pub mod gate;
pub mod lister;
pub mod presenter;

pub use gate::{LineGate, OperatorGate};
pub use lister::{MigrationBatch, MigrationFile, enumerate};
pub use presenter::{PresentReport, Presenter, PresenterOptions, PresenterState, present};
