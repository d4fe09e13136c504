pub mod reference;
pub mod submission;

pub use reference::ReferenceDataService;
pub use submission::{SubmissionService, SubmitError};
