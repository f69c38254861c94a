//! Hash an object by its wire encoding

use crypto::hash::{DoubleSha256Stream, StreamHasher};
use serialization::WireEncode;

use super::H256;

/// Feed the wire encoding of the object into a stream hasher
pub fn hash_encoded_to<T: WireEncode + ?Sized, H: StreamHasher>(val: &T, hasher: &mut H) {
    val.wire_encode_to(&mut HashWriter(hasher))
}

/// Double SHA-256 of the wire encoding, computed without materializing the encoding
pub fn double_sha256_encoded<T: WireEncode + ?Sized>(val: &T) -> H256 {
    let mut hasher = DoubleSha256Stream::new();
    hash_encoded_to(val, &mut hasher);
    H256::from_slice(&hasher.finalize())
}

// Adapts a StreamHasher to std::io::Write, which makes it an encoding sink.
struct HashWriter<'a, H: StreamHasher>(&'a mut H);

impl<H: StreamHasher> std::io::Write for HashWriter<'_, H> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streamed_hash_matches_buffered() {
        let values = vec![1u32, 0xffff_ffff, 42];
        assert_eq!(
            double_sha256_encoded(&values),
            H256(crypto::hash::double_sha256(values.wire_encode()))
        );
    }
}
