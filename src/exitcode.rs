//! Standard exit codes (BSD sysexits.h compatible)

/// Command line usage error
pub const USAGE: i32 = 64;

/// Data format error (invalid outline)
pub const DATAERR: i32 = 65;

/// Cannot open input
pub const NOINPUT: i32 = 66;

/// Can't create output directory
pub const CANTCREAT: i32 = 73;

/// Input/output error
pub const IOERR: i32 = 74;

/// Permission denied
pub const NOPERM: i32 = 77;

/// Configuration error
pub const CONFIG: i32 = 78;
