// Cipher boundary contracts:
// * deterministic: same chunk + keys + index => same output
// * byte-count preserving, and the dispatch glue enforces it
// * involutive reference backend: decrypt(encrypt(x)) == x per chunk
// * chunks are independent: distinct indices get distinct keystreams

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use blockpipe_core::chunking::Chunk;
    use blockpipe_core::cipher::{
        dispatch_chunk, ChunkCipher, CipherDirection, CipherDispatchError, KeyMaterial,
        KeystreamCipher, NullCipher,
    };

    fn test_keys() -> KeyMaterial {
        KeyMaterial::new([0x42u8; 32], [0x17u8; 16])
    }

    fn chunk(index: u64, data: &[u8]) -> Chunk {
        Chunk {
            index,
            data: Bytes::copy_from_slice(data),
        }
    }

    // ------------------------------------------------------------
    // Reference keystream backend
    // ------------------------------------------------------------
    #[test]
    fn keystream_is_deterministic() {
        let cipher = KeystreamCipher::new();
        let keys = test_keys();

        let a = cipher.encrypt_chunk(b"some chunk payload", &keys, 7).unwrap();
        let b = cipher.encrypt_chunk(b"some chunk payload", &keys, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn keystream_preserves_size() {
        let cipher = KeystreamCipher::new();
        let keys = test_keys();

        for len in [0usize, 1, 15, 16, 17, 4096] {
            let data = vec![0xA5u8; len];
            let out = cipher.encrypt_chunk(&data, &keys, 0).unwrap();
            assert_eq!(out.len(), len);
        }
    }

    #[test]
    fn keystream_roundtrips_per_chunk() {
        let cipher = KeystreamCipher::new();
        let keys = test_keys();
        let data: Vec<u8> = (0..=255).collect();

        let ct = cipher.encrypt_chunk(&data, &keys, 3).unwrap();
        assert_ne!(&ct[..], &data[..]);

        let pt = cipher.decrypt_chunk(&ct, &keys, 3).unwrap();
        assert_eq!(&pt[..], &data[..]);
    }

    #[test]
    fn distinct_indices_get_distinct_keystreams() {
        let cipher = KeystreamCipher::new();
        let keys = test_keys();
        let zeros = vec![0u8; 64];

        // Encrypting zeros exposes the raw keystream.
        let k0 = cipher.encrypt_chunk(&zeros, &keys, 0).unwrap();
        let k1 = cipher.encrypt_chunk(&zeros, &keys, 1).unwrap();
        assert_ne!(k0, k1);
    }

    #[test]
    fn distinct_ivs_get_distinct_keystreams() {
        let cipher = KeystreamCipher::new();
        let zeros = vec![0u8; 64];

        let a = cipher
            .encrypt_chunk(&zeros, &KeyMaterial::new([1u8; 32], [1u8; 16]), 0)
            .unwrap();
        let b = cipher
            .encrypt_chunk(&zeros, &KeyMaterial::new([1u8; 32], [2u8; 16]), 0)
            .unwrap();
        assert_ne!(a, b);
    }

    // ------------------------------------------------------------
    // Dispatch glue
    // ------------------------------------------------------------
    #[test]
    fn dispatch_carries_index_and_size() {
        let keys = test_keys();
        let result = dispatch_chunk(
            &KeystreamCipher::new(),
            CipherDirection::Encrypt,
            chunk(9, b"payload bytes"),
            &keys,
        )
        .unwrap();

        assert_eq!(result.index, 9);
        assert_eq!(result.len(), b"payload bytes".len());
    }

    #[test]
    fn null_cipher_passes_through() {
        let keys = test_keys();
        let result = dispatch_chunk(
            &NullCipher,
            CipherDirection::Encrypt,
            chunk(0, b"unchanged"),
            &keys,
        )
        .unwrap();
        assert_eq!(&result.data[..], b"unchanged");
    }

    /// Backend that drops the last byte of every chunk.
    struct TruncatingCipher;

    impl ChunkCipher for TruncatingCipher {
        fn name(&self) -> &'static str {
            "truncating"
        }

        fn encrypt_chunk(
            &self,
            plaintext: &[u8],
            _keys: &KeyMaterial,
            _chunk_index: u64,
        ) -> Result<Bytes, CipherDispatchError> {
            Ok(Bytes::copy_from_slice(&plaintext[..plaintext.len() - 1]))
        }

        fn decrypt_chunk(
            &self,
            ciphertext: &[u8],
            keys: &KeyMaterial,
            chunk_index: u64,
        ) -> Result<Bytes, CipherDispatchError> {
            self.encrypt_chunk(ciphertext, keys, chunk_index)
        }
    }

    #[test]
    fn size_mismatch_is_fatal() {
        let keys = test_keys();
        let err = dispatch_chunk(
            &TruncatingCipher,
            CipherDirection::Encrypt,
            chunk(4, b"ten bytes!"),
            &keys,
        )
        .unwrap_err();

        match err {
            CipherDispatchError::SizeMismatch {
                index,
                expected,
                actual,
                ..
            } => {
                assert_eq!(index, 4);
                assert_eq!(expected, 10);
                assert_eq!(actual, 9);
            }
            other => panic!("expected SizeMismatch, got {other:?}"),
        }
    }

    /// Backend that refuses every dispatch.
    struct OfflineCipher;

    impl ChunkCipher for OfflineCipher {
        fn name(&self) -> &'static str {
            "offline"
        }

        fn encrypt_chunk(
            &self,
            _plaintext: &[u8],
            _keys: &KeyMaterial,
            _chunk_index: u64,
        ) -> Result<Bytes, CipherDispatchError> {
            Err(CipherDispatchError::Unavailable {
                backend: "offline",
                reason: "device not initialized".into(),
            })
        }

        fn decrypt_chunk(
            &self,
            ciphertext: &[u8],
            keys: &KeyMaterial,
            chunk_index: u64,
        ) -> Result<Bytes, CipherDispatchError> {
            self.encrypt_chunk(ciphertext, keys, chunk_index)
        }
    }

    #[test]
    fn unavailable_backend_propagates() {
        let keys = test_keys();
        let err = dispatch_chunk(
            &OfflineCipher,
            CipherDirection::Encrypt,
            chunk(0, b"data"),
            &keys,
        )
        .unwrap_err();
        assert!(matches!(err, CipherDispatchError::Unavailable { .. }));
    }

    // ------------------------------------------------------------
    // Key material I/O
    // ------------------------------------------------------------
    #[test]
    fn key_material_round_trips_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let key_path = dir.path().join("key.bin");
        let iv_path = dir.path().join("iv.bin");

        let keys = KeyMaterial::generate();
        keys.save(&key_path, &iv_path).unwrap();

        let loaded = KeyMaterial::load(&key_path, &iv_path).unwrap();
        assert_eq!(loaded.key(), keys.key());
        assert_eq!(loaded.iv(), keys.iv());
    }

    #[test]
    fn short_key_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let key_path = dir.path().join("key.bin");
        let iv_path = dir.path().join("iv.bin");

        std::fs::write(&key_path, [0u8; 16]).unwrap(); // half a key
        std::fs::write(&iv_path, [0u8; 16]).unwrap();

        let err = KeyMaterial::load(&key_path, &iv_path).unwrap_err();
        assert!(err.to_string().contains("shorter"));
    }

    #[test]
    fn generated_material_is_not_constant() {
        let a = KeyMaterial::generate();
        let b = KeyMaterial::generate();
        assert_ne!(a.key(), b.key());
    }
}
