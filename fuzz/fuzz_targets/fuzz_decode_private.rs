#![no_main]

use libfuzzer_sys::fuzz_target;
use mldsa_keyfmt::core::operations::private_key::{detect_private_key, PrivateKeyInfo};
use mldsa_keyfmt::{AlgorithmId, CodecConfig, MlDsa44, MlDsa65, MlDsa87, MlDsaPrivateKey};

fuzz_target!(|data: &[u8]| {
    // Try decoding as each variant - should never panic
    let config = CodecConfig::default();
    let _ = MlDsaPrivateKey::<MlDsa44>::from_pkcs8_payload(data, &config);
    let _ = MlDsaPrivateKey::<MlDsa65>::from_pkcs8_payload(data, &config);
    let _ = MlDsaPrivateKey::<MlDsa87>::from_pkcs8_payload(data, &config);

    for algorithm in AlgorithmId::ALL {
        let info = PrivateKeyInfo::new(algorithm, data);
        let _ = detect_private_key(&info, &config);
    }
});
