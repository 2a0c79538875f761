/// Reconciliation core
///
/// Pure domain model and services: repository identity, artifact naming and
/// structured value extraction. Nothing in here performs I/O.
pub mod domain;
pub mod services;
