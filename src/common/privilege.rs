use super::{PermissionSnafu, Result};

pub fn is_root() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

/// Fails unless the process runs with an effective uid of 0.
pub fn require_root(action: &str) -> Result<()> {
    if is_root() {
        return Ok(());
    }
    PermissionSnafu {
        message: format!("Root privileges are required to {action}; re-run as root"),
    }
    .fail()
}
