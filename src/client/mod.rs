//! Client side of the sign-in flow.
//!
//! [`form::SignInForm`] is a headless form controller: it owns field state,
//! runs the shared credentials schema, sends the attempt through a
//! [`transport::SignInTransport`] and hands the success destination to a
//! [`navigator::Navigator`]. Front ends (the `signin` binary, the sign-in
//! page) only render its state and feed it user input.
//!
//! # Modules
//!
//! - [`form`] - Form state machine
//! - [`transport`] - Request seam and its reqwest implementation
//! - [`navigator`] - Navigation seam

pub mod form;
pub mod navigator;
pub mod transport;

pub use form::{FieldUpdate, FormPhase, SignInForm, SubmissionOutcome, SubmitStart};
pub use navigator::Navigator;
pub use transport::{HttpTransport, SignInReply, SignInTransport, TransportError};
