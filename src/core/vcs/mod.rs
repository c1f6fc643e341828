//! Version control backends
//!
//! Only a system-git backend exists; it is used for best-effort queries and
//! its failures are expected to degrade, never to abort a run.

mod system_git;

pub use system_git::SystemGit;
