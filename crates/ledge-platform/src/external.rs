//! External link opening.

use ledge_common::PlatformError;

/// Open a URL in the system default browser.
pub fn open_external(url: &str) -> Result<(), PlatformError> {
    open::that(url).map_err(|e| PlatformError::ShellError(format!("failed to open {url}: {e}")))
}
