//! Shared utilities for the Userdeck project.

pub mod version_info;
