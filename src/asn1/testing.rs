use super::constants::{EncryptionType, PrincipalNameType};
use super::encrypted_data::EncryptedData;
use super::kerberos_time::KerberosTime;
use super::principal_name::PrincipalName;
use super::ticket::Ticket;
use der::asn1::AnyRef;
use der::{DateTime, Decode, Reader, SliceReader, Tagged};

/// Independently re-parses `bytes` and checks it is exactly one canonical TLV
/// whose constructed members are themselves canonical and fully consumed.
pub(crate) fn assert_well_formed(bytes: &[u8]) {
    let any = AnyRef::from_der(bytes).expect("Not a single, canonical TLV");
    walk(any);
}

fn walk(any: AnyRef<'_>) {
    if !any.tag().is_constructed() {
        return;
    }
    let mut reader = SliceReader::new(any.value()).expect("Failed to build reader");
    while !reader.is_finished() {
        let member = AnyRef::decode(&mut reader).expect("Malformed nested TLV");
        walk(member);
    }
}

pub(crate) fn kerberos_time(
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minutes: u8,
    seconds: u8,
) -> KerberosTime {
    KerberosTime::from_date_time(
        DateTime::new(year, month, day, hour, minutes, seconds).expect("Failed to build datetime"),
    )
}

// Captured from an MIT KDC, an AS-REP for testuser@EXAMPLE.COM.
pub(crate) const AS_REP_SAMPLE: &str = "6b8203513082034da003020105a10302010ba22d302b3029a103020113a2220420301e301ca003020112a1151b134558414d504c452e434f4d7465737475736572a30d1b0b4558414d504c452e434f4da4153013a003020101a10c300a1b087465737475736572a58201ba618201b6308201b2a003020105a10d1b0b4558414d504c452e434f4da220301ea003020102a11730151b066b72627467741b0b4558414d504c452e434f4da382017830820174a003020112a103020101a282016604820162eac20712018638db059fc4580cb6aad87fbc722c85219b83574df7a6cee9ee5f6d83569c8ddfcd0695bd9ec215540200f905ec11f91353d6724be7fbfe9444606d39b4d85e4ae084a72a14a0f652a922da109e652b68dae1a519d2c2087b07c7d8f738738fe2276ead3c31d83bd3f8cbcc6c6ca8b5133a1cca5f09bfb45489fca80cecfc754d13f93418dc6385475400795d7f06f8ae9a146e21eeccd10f2efaa0bf1d3acde3f8d1c71cb7a555eedb1ce333a32941141c8ed7552a31df706d11be06b21c02178d2ac8bbed10964ff67b0b06e7f56f1c2422be26ac862521bf1be90b3977975a3346f2d2404342bf53b9c45d83a56c45fef0a7386ed82ffc0c4b23e10e9cb51ab18076d8fe9fc3d66d0ad9cd44764f2af929a181fe008d99de0acc44d689874ad433f1b04d129c2bb65f3070aa7c0343d9b07a44c9d031f950119f90744ff0085b0f4c08b29b281d376525736f9dd292eec03c16d2f5a681eb24bb56a682012c30820128a003020112a282011f0482011b602fe69bf3c949b575e0303ebec6975c3921b38a7479c16e68fd18d18972e670296ce1f6d005df8f423f44f9f8efcaafc8a148a141f706ddd24a2ded22f85b85c41ffe6168ba887a85f3b514e4f670818bf0f402c245cd167ef5136a72edd19e0536d0ea1863e27a227dd7207aa0d1c3d13526936636574f604bb57492feb534c1d8b15610bcce035a4de2d259103f9e63968f8b4e3f8b1e7120ef31bd390344bfabacf657ff062c8a50f12ffdf045df03d98bbc5f324b7a7eb48e4e656ceb5ee1325a394de51bb7617d6db4cda242c0aba97612dcf23816e08ca41bea80f4b2dc144422ed832c2395b61fdd9437f08fd2a3a1dd2475d61d61a102d1a38292afaded12f26318a6550328f60addb0542ac8e287d7a1c96f3593ca04";
pub(crate) const AS_REP_TICKET_CIPHER: &str = "eac20712018638db059fc4580cb6aad87fbc722c85219b83574df7a6cee9ee5f6d83569c8ddfcd0695bd9ec215540200f905ec11f91353d6724be7fbfe9444606d39b4d85e4ae084a72a14a0f652a922da109e652b68dae1a519d2c2087b07c7d8f738738fe2276ead3c31d83bd3f8cbcc6c6ca8b5133a1cca5f09bfb45489fca80cecfc754d13f93418dc6385475400795d7f06f8ae9a146e21eeccd10f2efaa0bf1d3acde3f8d1c71cb7a555eedb1ce333a32941141c8ed7552a31df706d11be06b21c02178d2ac8bbed10964ff67b0b06e7f56f1c2422be26ac862521bf1be90b3977975a3346f2d2404342bf53b9c45d83a56c45fef0a7386ed82ffc0c4b23e10e9cb51ab18076d8fe9fc3d66d0ad9cd44764f2af929a181fe008d99de0acc44d689874ad433f1b04d129c2bb65f3070aa7c0343d9b07a44c9d031f950119f90744ff0085b0f4c08b29b281d376525736f9dd292eec03c16d2f5a681eb24bb56";
pub(crate) const AS_REP_ENC_PART_CIPHER: &str = "602fe69bf3c949b575e0303ebec6975c3921b38a7479c16e68fd18d18972e670296ce1f6d005df8f423f44f9f8efcaafc8a148a141f706ddd24a2ded22f85b85c41ffe6168ba887a85f3b514e4f670818bf0f402c245cd167ef5136a72edd19e0536d0ea1863e27a227dd7207aa0d1c3d13526936636574f604bb57492feb534c1d8b15610bcce035a4de2d259103f9e63968f8b4e3f8b1e7120ef31bd390344bfabacf657ff062c8a50f12ffdf045df03d98bbc5f324b7a7eb48e4e656ceb5ee1325a394de51bb7617d6db4cda242c0aba97612dcf23816e08ca41bea80f4b2dc144422ed832c2395b61fdd9437f08fd2a3a1dd2475d61d61a102d1a38292afaded12f26318a6550328f60addb0542ac8e287d7a1c96f3593ca04";

// Captured from an AD domain controller, an AP-REQ for krbtgt/AFOREST.AD.
pub(crate) const AP_REQ_SAMPLE: &str = "6e82053730820533a003020105a10302010ea20703050000000000a382045a6182045630820452a003020105a10c1b0a41464f524553542e4144a21f301da003020102a11630141b066b72627467741b0a41464f524553542e4144a382041a30820416a003020112a103020102a282040804820404047182f3a44f625897c7818b8cb5196127d569250ae4eae113609572e3aa228ce468402cd83d8297ace99a53859168bae937f739a5c6be86591839f4d361a9d9991ea87d1acc41e16262e12372a528c605957597fd5547da8335fff479d423dee607cb0321cda03774c7371762feb1b54b96809917f3663f9788964a5c32aa2414a1707f13fb444efc0dac0ea440f70ff6a0f6b005e48eb5204a423eda036b079ab217a3c28a1905ca239a784caa59835ce9ce3c68101bd737fad1bd0208afd142267645d5adc5fc2916e6c78b440e9542f248dc9fd19b553b26b7bca5466e9a22f8dcddd7c1a52e186663b948471c48466372cbcf5fbda9865d5171790bc5d94eb7025895dffc06144a1aae5958e979ec45bd9c16033999d847740c79134d0768c3561ee3dba6572f31686ce0d2367d2fb19cc3cfbd8848515666fab5689ac6c71ecb2892f7d6e932d42708b908c991fde2c7ed69d741755cd350e599c25cd52c2e6df1a0786ef0fe4522db3739dfdd7c87f155bd5092312047ea47932210c27e9feaaaeb64e2f2ed9a64fa0286b7497bae02b94b9595bf61819dbaf5159e126e485a7d081262726e400bce1a37d7be868bb9b37a69e813f19cd2baf8ca6783b9193f1568888f50ac3a1633daecc45087add270b79c93f58b25860eda60e986a5fae52af55e37bee4e89609a382dccd9de468e68723c745da355745ab7993f391be333a9174406e1fb73e5f6c43d57dd1dedca470ab468d737dee0c773d228711f72bdd4066d2facfb5e297eb0cbe36a3e666fe0759a21b62b0b382fc5f5b4d0b792721d75ba54f7c80e5746c7c80162ef407ed5c91365e9c7da59b8f232ad59a006b4c6be12a23b0ce3327691c979cb6091aa9c13196de3e513296d3946c72d1ecb5279fe4f8a3fb5b90aa218e95723dcade056df4e2e4a5ea93611577969848980c7895f9410c03c26043cf802d42c5f75fec61539d32a99fb31f440bfff144e70e5b236198c0b9baeb3681e43c883b1efb55d165ed593bc850352f257217377677aa5af13231b900ee8586c4bd4a26c490dde68a192e835c3dcede4e32c4e551c66bed360e49b86c976a689bbf0378259cb081b8b6ff61168ef48b18bf8d5ffca324e729d30e368d986251a3587e6ebeda15ada37bb14e9934fb6bd239c2fba489ef5605f8e9d97f21d8d1b178c4483f10e4f9e5c6b7ff6ddd511b24e5f02d9574025228770fce424c527c639545e30d4a9fe5a8c0b0b2e625e42ba81a37bc73173b4690708db8e086310c2b681e83b27e5acb0e482dec7d58b768a0b335608c11a9427a6e1ea42e293e0780808ba0ea18ca4fa665c92da73de64f2467fb2fa26e97e4d2e9d1a9d701e6ea9cc0fbf6dde52beac846d4afd9228139b486dbd14ee3e430c7b46ab554bec0f8a85c4959535755598f8942d176dd6a0a1b7acd55de57fca481bf3081bca003020112a281b40481b13d920e7f4264b8bf505dbde39eec7434d4feb7d8136ca12538364c2fce983df838d837c9ee3d58b23112fec7243ff0c9609b56709a52f06d4223558b789e082d43024444725be842761dee4fcdc4fda3bfbd3973936b7224e5f92a72736c4a073621abaaebbbf824a28408e08f2e2dfbfb7d157046aa6aeba6045e763ac62c0aaea68ea7bac1dab531bb118303e1e1e49b0eaed8412513aca6a23c74a61e545f8864b492d716459a936066bac831ef3806";
pub(crate) const AP_REQ_TICKET_CIPHER: &str = "047182f3a44f625897c7818b8cb5196127d569250ae4eae113609572e3aa228ce468402cd83d8297ace99a53859168bae937f739a5c6be86591839f4d361a9d9991ea87d1acc41e16262e12372a528c605957597fd5547da8335fff479d423dee607cb0321cda03774c7371762feb1b54b96809917f3663f9788964a5c32aa2414a1707f13fb444efc0dac0ea440f70ff6a0f6b005e48eb5204a423eda036b079ab217a3c28a1905ca239a784caa59835ce9ce3c68101bd737fad1bd0208afd142267645d5adc5fc2916e6c78b440e9542f248dc9fd19b553b26b7bca5466e9a22f8dcddd7c1a52e186663b948471c48466372cbcf5fbda9865d5171790bc5d94eb7025895dffc06144a1aae5958e979ec45bd9c16033999d847740c79134d0768c3561ee3dba6572f31686ce0d2367d2fb19cc3cfbd8848515666fab5689ac6c71ecb2892f7d6e932d42708b908c991fde2c7ed69d741755cd350e599c25cd52c2e6df1a0786ef0fe4522db3739dfdd7c87f155bd5092312047ea47932210c27e9feaaaeb64e2f2ed9a64fa0286b7497bae02b94b9595bf61819dbaf5159e126e485a7d081262726e400bce1a37d7be868bb9b37a69e813f19cd2baf8ca6783b9193f1568888f50ac3a1633daecc45087add270b79c93f58b25860eda60e986a5fae52af55e37bee4e89609a382dccd9de468e68723c745da355745ab7993f391be333a9174406e1fb73e5f6c43d57dd1dedca470ab468d737dee0c773d228711f72bdd4066d2facfb5e297eb0cbe36a3e666fe0759a21b62b0b382fc5f5b4d0b792721d75ba54f7c80e5746c7c80162ef407ed5c91365e9c7da59b8f232ad59a006b4c6be12a23b0ce3327691c979cb6091aa9c13196de3e513296d3946c72d1ecb5279fe4f8a3fb5b90aa218e95723dcade056df4e2e4a5ea93611577969848980c7895f9410c03c26043cf802d42c5f75fec61539d32a99fb31f440bfff144e70e5b236198c0b9baeb3681e43c883b1efb55d165ed593bc850352f257217377677aa5af13231b900ee8586c4bd4a26c490dde68a192e835c3dcede4e32c4e551c66bed360e49b86c976a689bbf0378259cb081b8b6ff61168ef48b18bf8d5ffca324e729d30e368d986251a3587e6ebeda15ada37bb14e9934fb6bd239c2fba489ef5605f8e9d97f21d8d1b178c4483f10e4f9e5c6b7ff6ddd511b24e5f02d9574025228770fce424c527c639545e30d4a9fe5a8c0b0b2e625e42ba81a37bc73173b4690708db8e086310c2b681e83b27e5acb0e482dec7d58b768a0b335608c11a9427a6e1ea42e293e0780808ba0ea18ca4fa665c92da73de64f2467fb2fa26e97e4d2e9d1a9d701e6ea9cc0fbf6dde52beac846d4afd9228139b486dbd14ee3e430c7b46ab554bec0f8a85c4959535755598f8942d176dd6a0a1b7acd55de57fc";
pub(crate) const AP_REQ_AUTHENTICATOR_CIPHER: &str = "3d920e7f4264b8bf505dbde39eec7434d4feb7d8136ca12538364c2fce983df838d837c9ee3d58b23112fec7243ff0c9609b56709a52f06d4223558b789e082d43024444725be842761dee4fcdc4fda3bfbd3973936b7224e5f92a72736c4a073621abaaebbbf824a28408e08f2e2dfbfb7d157046aa6aeba6045e763ac62c0aaea68ea7bac1dab531bb118303e1e1e49b0eaed8412513aca6a23c74a61e545f8864b492d716459a936066bac831ef3806";

// AS-REQs from a few different clients.
pub(crate) const AS_REQ_SAMPLES: [&str; 3] = [
    "6a81b23081afa103020105a20302010aa31a3018300aa10402020096a2020400300aa10402020095a2020400a48186308183a00703050000000010a1143012a003020101a10b30091b0777696c6c69616da20b1b094b4b4443502e444556a31e301ca003020102a11530131b066b72627467741b094b4b4443502e444556a511180f32303234303431373034313534395aa70602047fbda7aea81a301802011202011102011402011302011002011702011902011a",
    "6a81ff3081fca103020105a20302010aa32d302b300aa10402020096a2020400300aa10402020095a20204003011a10402020080a20904073005a0030101ffa481c03081bda00703050050010010a1123010a003020101a10930071b057573657231a20c1b0a41464f524553542e4144a31f301da003020102a11630141b066b72627467741b0a41464f524553542e4144a511180f32303234303631323134353130395aa7060204586155dda814301202011402011302011202011102011a020119a93e303c300da003020102a1060404c0a80164300da003020102a1060404ac110001300da003020102a1060404c0a86501300da003020102a10604040a95d65a",
    "6a81ca3081c7a103020105a20302010aa31a3018300aa10402020096a2020400300aa10402020095a2020400a4819e30819ba00703050000800000a1153013a003020101a10c300a1b087465737475736572a20d1b0b4558414d504c452e434f4da320301ea003020102a11730151b066b72627467741b0b4558414d504c452e434f4da511180f32303234303631363035323730315aa611180f32303234303632323035323730315aa70602042e71de55a81a301802011202011102011402011302011002011702011902011a",
];

/// The TGT carried by [`AS_REP_SAMPLE`].
pub(crate) fn as_rep_ticket() -> Ticket {
    let cipher = hex::decode(AS_REP_TICKET_CIPHER).expect("Failed to decode sample");
    Ticket::new(
        "EXAMPLE.COM".into(),
        PrincipalName::from((PrincipalNameType::NtSrvInst, "krbtgt/EXAMPLE.COM")),
        EncryptedData::new(EncryptionType::AES256_CTS_HMAC_SHA1_96, Some(1), cipher),
    )
}

/// The TGT carried by [`AP_REQ_SAMPLE`].
pub(crate) fn ap_req_ticket() -> Ticket {
    let cipher = hex::decode(AP_REQ_TICKET_CIPHER).expect("Failed to decode sample");
    Ticket::new(
        "AFOREST.AD".into(),
        PrincipalName::from((PrincipalNameType::NtSrvInst, "krbtgt/AFOREST.AD")),
        EncryptedData::new(EncryptionType::AES256_CTS_HMAC_SHA1_96, Some(2), cipher),
    )
}
