//! `authme`, sign and verify EIP-7702 authorizations from the command line.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod cmd;

// Only used by the binary.
use color_eyre as _;
use tracing_subscriber as _;
