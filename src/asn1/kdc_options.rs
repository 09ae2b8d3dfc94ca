use super::kerberos_flags::KerberosFlags;

/// ```text
/// KDCOptions      ::= KerberosFlags
/// ````
pub type KdcOptions = KerberosFlags;
