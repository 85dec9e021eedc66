//! Comprehensive LZW integration tests.

use oxilzw::{LzwConfig, LzwDecoder, LzwEncoder, LzwError, decode, decode_with, encode, encode_with};

#[test]
fn test_lzw_abababa_scenario() {
    let encoded = encode("ABABABA", 256, 4096, None).expect("compression failed");
    assert_eq!(encoded.codes, vec![65, 66, 256, 258]);

    let decoded = decode(&encoded.codes, 256).expect("decompression failed");
    assert_eq!(decoded.text, "ABABABA");
}

#[test]
fn test_lzw_roundtrip_310_chars() {
    let original = "This is a test of compression! ".repeat(10);
    assert_eq!(original.len(), 310);

    let encoded = encode(&original, 256, 4096, None).expect("compression failed");
    println!(
        "310 chars -> {} codes ({:.2} chars/code)",
        encoded.codes.len(),
        encoded.symbols_per_code()
    );

    let decoded = decode(&encoded.codes, 256).expect("decompression failed");
    assert_eq!(decoded.text.len(), 310, "Must not truncate!");
    assert_eq!(decoded.text, original);
}

#[test]
fn test_lzw_roundtrip_large() {
    let original = "The quick brown fox jumps over the lazy dog. ".repeat(2_000);
    let config = LzwConfig::new(256, 1024);
    let encoded = encode_with(&original, &config).expect("compression failed");

    // The cap is hit long before the end; encoding carries on with the frozen table.
    assert_eq!(encoded.stats.learned_entries, 1024 - 256);
    assert!(encoded.codes.iter().all(|&code| code < 1024));

    let decoded = decode(&encoded.codes, 256).expect("decompression failed");
    assert_eq!(decoded.text, original);
    let capped = decode_with(&encoded.codes, &config).expect("decompression failed");
    assert_eq!(capped.text, original);
}

#[test]
fn test_lzw_empty_input() {
    let encoded = encode("", 256, 4096, None).expect("compression failed");
    assert!(encoded.codes.is_empty());
    assert_eq!(decode(&[], 256).unwrap_err(), LzwError::EmptyCodeSequence);
}

#[test]
fn test_lzw_single_char() {
    let encoded = encode("a", 256, 4096, None).expect("compression failed");
    assert_eq!(encoded.codes, vec![97]);
    assert_eq!(decode(&[97], 256).expect("decompression failed").text, "a");
}

#[test]
fn test_lzw_all_latin1_values() {
    let original: String = (0u32..256).filter_map(char::from_u32).collect();
    let encoded = encode(&original, 256, 4096, None).expect("compression failed");
    // No repeated pairs: one code per character.
    assert_eq!(encoded.codes, (0..256).collect::<Vec<_>>());

    let decoded = decode(&encoded.codes, 256).expect("decompression failed");
    assert_eq!(decoded.text, original);
}

#[test]
fn test_lzw_unicode_alphabet() {
    let original = "\u{3b1}\u{3b2}\u{3b3} \u{3b1}\u{3b2}\u{3b3} \u{2603}\u{2603}\u{2603} \u{3b1}\u{3b2}".repeat(25);
    let config = LzwConfig::new(0x3000, 0x4000);

    let encoded = encode_with(&original, &config).expect("compression failed");
    let decoded = decode_with(&encoded.codes, &config).expect("decompression failed");
    assert_eq!(decoded.text, original);

    // A byte-sized seed cannot represent the same text.
    assert!(matches!(
        encode(&original, 256, 4096, None),
        Err(LzwError::UnknownSymbol { position: 0, .. })
    ));
}

#[test]
fn test_lzw_minimal_alphabet() {
    let original = "\u{0}".repeat(100);
    let encoded = encode(&original, 1, 64, None).expect("compression failed");
    let decoded = decode(&encoded.codes, 1).expect("decompression failed");
    assert_eq!(decoded.text, original);
}

#[test]
fn test_lzw_cap_equal_to_seed() {
    // No room to learn anything: every character is its own code.
    let original = "banana";
    let encoded = encode(original, 256, 256, None).expect("compression failed");
    assert_eq!(encoded.codes, vec![98, 97, 110, 97, 110, 97]);
    assert_eq!(encoded.stats.learned_entries, 0);
    assert_eq!(decode(&encoded.codes, 256).unwrap().text, original);
}

#[test]
fn test_lzw_mismatched_seed_is_detected() {
    let original = "TOBEORNOTTOBEORTOBEORNOT";
    let encoded = encode(original, 256, 4096, None).expect("compression failed");

    // With a 128 seed, code 256 is two entries ahead of the decoder's table.
    let err = decode(&encoded.codes, 128).unwrap_err();
    assert!(matches!(err, LzwError::DesynchronizedTable { .. }));
}

#[test]
fn test_lzw_invalid_parameters() {
    assert!(matches!(
        encode("abc", 0, 4096, None),
        Err(LzwError::InvalidParameter { .. })
    ));
    assert!(matches!(
        encode("abc", 256, 128, None),
        Err(LzwError::InvalidParameter { .. })
    ));
    assert!(matches!(
        encode("abc", 256, 4096, Some(100)),
        Err(LzwError::InvalidParameter { .. })
    ));
    assert!(matches!(decode(&[1], 0), Err(LzwError::InvalidParameter { .. })));
}

#[test]
fn test_lzw_encoder_reuse() {
    let encoder = LzwEncoder::new(LzwConfig::default()).expect("encoder");
    let decoder = LzwDecoder::new(256).expect("decoder");

    for text in ["ABABABA", "", "hello world", "ABABABA"] {
        let encoded = encoder.encode(text).expect("compression failed");
        if text.is_empty() {
            assert!(encoded.codes.is_empty());
            continue;
        }
        assert_eq!(decoder.decode(&encoded.codes).unwrap().text, text);
    }
    assert_eq!(
        encoder.encode("ABABABA").unwrap().codes,
        vec![65, 66, 256, 258]
    );
}

#[test]
fn test_compression_effectiveness() {
    let test_cases = vec![
        ("AAAAAAAAAAAAAAAAAAAA".to_string(), "all same"),
        ("ABABABABABABABABABAB".to_string(), "alternating"),
        (
            "This is a test. This is a test. This is a test.".to_string(),
            "repeated phrase",
        ),
    ];

    for (text, description) in test_cases {
        let encoded = encode(&text, 256, 4096, None).expect("compression failed");

        println!(
            "{}: {} chars -> {} codes",
            description,
            text.chars().count(),
            encoded.codes.len()
        );

        assert!(
            encoded.codes.len() < text.chars().count(),
            "{} should compress",
            description
        );

        let decoded = decode(&encoded.codes, 256).expect("decompression failed");
        assert_eq!(decoded.text, text);
    }
}
