use num_enum::{IntoPrimitive, TryFromPrimitive};

/// RFC 4120 section 5.4.2. A negative value means the information applies to
/// the client principal only, a positive one to all principals of the realm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum LastReqType {
    NoInformation = 0,
    LastInitialTgtRequest = 1,
    LastInitialRequest = 2,
    NewestTgtIssue = 3,
    LastRenewal = 4,
    LastRequest = 5,
    PasswordExpiration = 6,
    AccountExpiration = 7,
}
