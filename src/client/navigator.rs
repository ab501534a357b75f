//! Navigation seam.

/// Where the browsing context goes after a successful sign-in.
pub const SUCCESS_DESTINATION: &str = "/dashboard";

/// Moves the user to another page. Routing itself lives outside this crate.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}
