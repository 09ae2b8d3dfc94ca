/// Largest message we are willing to emit unless configured otherwise.
pub const DEFAULT_IO_MAX_SIZE: usize = 32 * 1024;

/// Every Kerberos 5 message and ticket carries this protocol version.
pub const PVNO: u32 = 5;
