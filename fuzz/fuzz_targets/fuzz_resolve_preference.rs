#![no_main]

use libfuzzer_sys::fuzz_target;
use mldsa_keyfmt::core::format::FormatTable;
use mldsa_keyfmt::core::preference::{Direction, FormatPreference};
use mldsa_keyfmt::AlgorithmId;

fuzz_target!(|data: &str| {
    for algorithm in AlgorithmId::ALL {
        let table = FormatTable::for_algorithm(algorithm);
        if let Ok(preference) = FormatPreference::resolve(table, Direction::Output, Some(data)) {
            assert!(preference.len() <= table.formats.len());
        }
    }
});
