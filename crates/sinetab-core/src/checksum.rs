// crates/sinetab-core/src/checksum.rs

use std::fmt;

/// Fingerprint of a sample image: CRC-32 (IEEE) plus a 16-byte blake3 id.
///
/// The CRC is the common zlib/PNG polynomial, so it can be checked against a
/// raw 256-byte dump with stock tools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digest {
    pub crc32: u32,
    pub id: [u8; 16],
}

impl Digest {
    pub fn of(bytes: &[u8]) -> Digest {
        let mut h = crc32fast::Hasher::new();
        h.update(bytes);

        let mut id = [0u8; 16];
        id.copy_from_slice(&blake3::hash(bytes).as_bytes()[..16]);

        Digest {
            crc32: h.finalize(),
            id,
        }
    }

    pub fn id_hex(&self) -> String {
        self.id.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "crc32={:08x} id={}", self.crc32, self.id_hex())
    }
}
