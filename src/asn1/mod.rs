pub mod ad_and_or;
pub mod ad_kdc_issued;
pub mod ap_options;
pub mod ap_rep;
pub mod ap_req;
pub mod authenticator;
pub mod authorization_data;
pub mod ber;
pub mod change_passwd_data;
pub mod checksum;
pub mod constants;
pub mod enc_ap_rep_part;
pub mod enc_kdc_rep_part;
pub mod enc_krb_cred_part;
pub mod enc_krb_priv_part;
pub mod enc_ticket_part;
pub mod encrypted_data;
pub mod encryption_key;
pub mod etype_info;
pub mod etype_info2;
pub mod host_address;
pub mod host_addresses;
pub mod kdc_options;
pub mod kdc_rep;
pub mod kdc_req;
pub mod kdc_req_body;
pub mod kerberos_flags;
pub mod kerberos_string;
pub mod kerberos_time;
pub mod krb_cred;
pub mod krb_cred_info;
pub mod krb_error;
pub mod krb_kdc_rep;
pub mod krb_kdc_req;
pub mod krb_priv;
pub mod krb_safe;
pub mod krb_safe_body;
pub mod last_req;
pub mod method_data;
pub mod microseconds;
pub mod pa_data;
pub mod pa_enc_ts_enc;
pub mod principal_name;
pub mod realm;
pub mod tagged_enc_kdc_rep_part;
pub mod ticket;
pub mod ticket_flags;
pub mod transited_encoding;
pub mod typed_data;

#[cfg(test)]
mod testing;

pub use self::ber::{BerEncode, Prepared};
pub use der::DateTime;
