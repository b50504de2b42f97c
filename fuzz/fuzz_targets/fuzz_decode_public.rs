#![no_main]

use libfuzzer_sys::fuzz_target;
use mldsa_keyfmt::core::operations::public_key::detect_public_key;
use mldsa_keyfmt::{MlDsa44, MlDsa65, MlDsa87, MlDsaPublicKey};

fuzz_target!(|data: &[u8]| {
    // Try parsing as each variant - should never panic
    let _ = MlDsaPublicKey::<MlDsa44>::try_from(data);
    let _ = MlDsaPublicKey::<MlDsa65>::try_from(data);
    let _ = MlDsaPublicKey::<MlDsa87>::try_from(data);
    let _ = detect_public_key(data);
});
