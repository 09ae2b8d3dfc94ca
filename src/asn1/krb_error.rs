use super::ber::{required, BerEncode, BerEncoder, LengthCache};
use super::constants::KrbMessageType;
use super::kerberos_string::KerberosString;
use super::kerberos_time::KerberosTime;
use super::microseconds::Microseconds;
use super::principal_name::PrincipalName;
use super::realm::Realm;
use crate::constants::PVNO;
use crate::error;
use bytes::Bytes;
use std::fmt;

/// ```text
/// KRB-ERROR       ::= [APPLICATION 30] SEQUENCE {
///            pvno            [0] INTEGER (5),
///            msg-type        [1] INTEGER (30),
///            ctime           [2] KerberosTime OPTIONAL,
///            cusec           [3] Microseconds OPTIONAL,
///            stime           [4] KerberosTime,
///            susec           [5] Microseconds,
///            error-code      [6] Int32,
///            crealm          [7] Realm OPTIONAL,
///            cname           [8] PrincipalName OPTIONAL,
///            realm           [9] Realm -- service realm --,
///            sname           [10] PrincipalName -- service name --,
///            e-text          [11] KerberosString OPTIONAL,
///            e-data          [12] OCTET STRING OPTIONAL
///    }
/// ```
///
/// ```text
///    If the errorcode is KDC_ERR_PREAUTH_REQUIRED, then the e-data field will
///    contain an encoding of a sequence of padata fields, each
///    corresponding to an acceptable pre-authentication method and
///    optionally containing data for the method:
///
///      METHOD-DATA     ::= SEQUENCE OF PA-DATA
///
///   For error codes defined in this document other than
///   KDC_ERR_PREAUTH_REQUIRED, the format and contents of the e-data field
///   are implementation-defined.
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct KrbError {
    pub ctime: Option<KerberosTime>,
    pub cusec: Option<Microseconds>,
    pub stime: Option<KerberosTime>,
    pub susec: Microseconds,
    pub error_code: i32,
    pub crealm: Option<Realm>,
    pub cname: Option<PrincipalName>,
    pub service_realm: Option<Realm>,
    pub service_name: Option<PrincipalName>,
    pub error_text: Option<KerberosString>,
    pub error_data: Option<Bytes>,
}

impl KrbError {
    pub fn new<C: Into<i32>>(
        stime: KerberosTime,
        susec: Microseconds,
        error_code: C,
        service_realm: Realm,
        service_name: PrincipalName,
    ) -> Self {
        KrbError {
            stime: Some(stime),
            susec,
            error_code: error_code.into(),
            service_realm: Some(service_realm),
            service_name: Some(service_name),
            ..Default::default()
        }
    }

    /// Sets e-data to the encoding of `value`, usually a METHOD-DATA or a
    /// TYPED-DATA.
    pub fn set_error_data<E: BerEncode>(&mut self, value: &E) -> Result<(), error::KrbError> {
        self.error_data = Some(value.serialize()?);
        Ok(())
    }
}

impl BerEncode for KrbError {
    const NAME: &'static str = "KRB-ERROR";

    fn compute_length(&self, cache: &mut LengthCache<'_>) -> Result<usize, error::KrbError> {
        let stime = required(&self.stime, Self::NAME, "stime")?;
        let service_realm = required(&self.service_realm, Self::NAME, "realm")?;
        let service_name = required(&self.service_name, Self::NAME, "sname")?;
        let msg_type: u32 = KrbMessageType::KrbError.into();
        cache.application(|cache| {
            Ok(cache.explicit(&PVNO)?
                + cache.explicit(&msg_type)?
                + cache.explicit_opt(&self.ctime)?
                + cache.explicit_opt(&self.cusec)?
                + cache.explicit(stime)?
                + cache.explicit(&self.susec)?
                + cache.explicit(&self.error_code)?
                + cache.explicit_opt(&self.crealm)?
                + cache.explicit_opt(&self.cname)?
                + cache.explicit(service_realm)?
                + cache.explicit(service_name)?
                + cache.explicit_opt(&self.error_text)?
                + cache.explicit_opt(&self.error_data)?)
        })
    }

    fn encode(&self, encoder: &mut BerEncoder<'_>) -> Result<(), error::KrbError> {
        let stime = required(&self.stime, Self::NAME, "stime")?;
        let service_realm = required(&self.service_realm, Self::NAME, "realm")?;
        let service_name = required(&self.service_name, Self::NAME, "sname")?;
        let msg_type: u32 = KrbMessageType::KrbError.into();
        encoder.application(30, |encoder| {
            encoder.explicit(0, &PVNO)?;
            encoder.explicit(1, &msg_type)?;
            encoder.explicit_opt(2, &self.ctime)?;
            encoder.explicit_opt(3, &self.cusec)?;
            encoder.explicit(4, stime)?;
            encoder.explicit(5, &self.susec)?;
            encoder.explicit(6, &self.error_code)?;
            encoder.explicit_opt(7, &self.crealm)?;
            encoder.explicit_opt(8, &self.cname)?;
            encoder.explicit(9, service_realm)?;
            encoder.explicit(10, service_name)?;
            encoder.explicit_opt(11, &self.error_text)?;
            encoder.explicit_opt(12, &self.error_data)
        })
    }
}

impl fmt::Display for KrbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KRB-ERROR {{ error-code: {}", self.error_code)?;
        if let Some(stime) = &self.stime {
            write!(f, ", stime: {stime}.{:06}", self.susec)?;
        }
        if let (Some(cname), Some(crealm)) = (&self.cname, &self.crealm) {
            write!(f, ", client: {cname}@{crealm}")?;
        }
        if let (Some(service_name), Some(service_realm)) = (&self.service_name, &self.service_realm)
        {
            write!(f, ", server: {service_name}@{service_realm}")?;
        }
        if let Some(error_text) = &self.error_text {
            write!(f, ", e-text: {error_text}")?;
        }
        if let Some(error_data) = &self.error_data {
            write!(f, ", e-data: {}", hex::encode(error_data))?;
        }
        f.write_str(" }")
    }
}
