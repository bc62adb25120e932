/// Org-chart domain layer: department and employee models plus the
/// pure services that turn flat directory listings into a browsable tree.
pub mod domain;
pub mod services;
