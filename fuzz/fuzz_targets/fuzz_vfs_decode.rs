#![no_main]

use libfuzzer_sys::fuzz_target;

use distmodel::infrastructure::{decode_str, MemoryFs};
use distmodel::{DescriptorBuilder, Flattener, NoopSink};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Decoding arbitrary input must error, never panic; whatever decodes
        // must also flatten and describe cleanly
        if let Ok((mut vfs, root)) = decode_str(content) {
            let fs = MemoryFs::everything_exists();
            let flat = Flattener::new(&fs, &NoopSink).flatten(&mut vfs, root);
            let _ = DescriptorBuilder::new(&fs, &NoopSink).build_descriptors(&vfs, flat, false);
        }
    }
});
