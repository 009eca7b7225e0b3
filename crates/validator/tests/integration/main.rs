//! Integration tests for schemata-validator.
//!
//! Each submodule exercises one area through the public API only.

mod derive;
mod end_to_end;
mod scalars;
mod structs;
mod threads;
