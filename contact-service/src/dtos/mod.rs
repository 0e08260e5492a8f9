pub mod contact;
pub mod diagnostics;

pub use contact::{record_to_json, ContactListParams, SubmitContactResponse};
pub use diagnostics::DiagnosticsResponse;
