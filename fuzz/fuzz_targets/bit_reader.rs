#![no_main]

use libfuzzer_sys::fuzz_target;
use seedphrase_core::BitReader;

fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    let (data, counts) = input;
    let mut reader = BitReader::new(&data);

    for count in counts {
        let count = u32::from(count);
        let before = reader.remaining_bits();
        match reader.read_bits(count) {
            Ok(value) => {
                assert!(count == 64 || value >> count == 0);
                assert_eq!(reader.remaining_bits() + count as usize, before);
            }
            // A failed read consumes nothing
            Err(_) => assert_eq!(reader.remaining_bits(), before),
        }
    }
});
