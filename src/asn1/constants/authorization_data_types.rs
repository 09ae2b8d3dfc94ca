use num_enum::{IntoPrimitive, TryFromPrimitive};

#[allow(non_camel_case_types)]
#[derive(Debug, TryFromPrimitive, IntoPrimitive, PartialEq, Eq, Clone, Copy)]
#[repr(i32)]
pub enum AuthorizationDataType {
    AdIfRelevant = 1,
    AdIntendedForServer = 2,
    AdIntendedForApplicationClass = 3,
    AdKdcIssued = 4,
    AdAndOr = 5,
    AdMandatoryTicketExtensions = 6,
    AdInTicketExtensions = 7,
    AdMandatoryForKdc = 8,
    OsfDce = 64,
    Sesame = 65,
    AdOsfDcePkiCertid = 66,
    AdWin2kPac = 128,
    AdEtypeNegotiation = 129,
}
