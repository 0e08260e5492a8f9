pub mod contact;
pub mod diagnostics;
pub mod metrics;
pub mod root;

pub use contact::{list_contacts, submit_contact};
pub use diagnostics::test_database;
pub use metrics::metrics_endpoint;
pub use root::{not_found, read_root};
