//! Capacities and fixed tokens shared across the crate.

/// Default capacity of every bounded name, in bytes.
///
/// One byte of the capacity is reserved for the terminator of the C-style
/// argument the name ends up in, so the longest accepted name is
/// `DEFAULT_CAPACITY - 1` bytes.
pub const DEFAULT_CAPACITY: usize = 128 - 8;

/// Capacity of a flag or object name.
pub const NAME_CAPACITY: usize = DEFAULT_CAPACITY;

/// Capacity of the compiler command.
pub const COMMAND_CAPACITY: usize = DEFAULT_CAPACITY;

/// Capacity of the output path.
pub const OUTPUT_CAPACITY: usize = DEFAULT_CAPACITY;

/// Marker placed before the output path on the command line.
pub const OUTPUT_FLAG: &str = "-o";

/// Environment variable enabling diagnostic echo of the command line.
pub const ECHO_ENV: &str = "NOBUILD_ECHO";
