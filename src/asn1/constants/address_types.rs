use num_enum::{IntoPrimitive, TryFromPrimitive};

/// RFC 4120 section 7.5.3
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum HostAddressType {
    IPv4 = 2,
    Directional = 3,
    ChaosNet = 5,
    Xns = 6,
    Iso = 7,
    DecnetPhaseIv = 12,
    AppleTalkDdp = 16,
    NetBios = 20,
    IPv6 = 24,
}
