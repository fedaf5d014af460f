use glpack::ser::{deserialize_tagged_with, deserialize_with, serialize, serialize_tagged};
use glpack::{Error, ErrorKind, FormatConfig, Vec2};

#[test]
fn element_limit_is_enforced() {
    let values = vec![Vec2::new(0.0, 1.0); 17];
    let buffer = serialize(&values).unwrap();
    let config = FormatConfig::default().with_max_elements(16);
    let err = deserialize_with::<Vec2>(buffer.as_slice(), &config).expect_err("17 > 16");
    assert!(matches!(
        err,
        Error::LimitExceeded {
            count: 17,
            limit: 16
        }
    ));
}

#[test]
fn element_limit_is_inclusive() {
    let values = vec![7u32; 16];
    let buffer = serialize(&values).unwrap();
    let config = FormatConfig::default().with_max_elements(16);
    let (decoded, _) = deserialize_with::<u32>(buffer.as_slice(), &config).unwrap();
    assert_eq!(decoded, values);
}

#[test]
fn tagged_decoding_honours_limit() {
    let buffer = serialize_tagged(&[1.0f32, 2.0, 3.0]).unwrap();
    let config = FormatConfig::tagged().with_max_elements(2);
    let err = deserialize_tagged_with::<f32>(buffer.as_slice(), &config).expect_err("3 > 2");
    assert_eq!(err.kind(), ErrorKind::LimitExceeded);
}

#[test]
fn size_is_checked_before_limit() {
    // A lying prefix on a short buffer is reported as a size problem even
    // when the claimed count is also above the limit.
    let mut bytes = glpack::ser::encode_u64(1 << 40).to_vec();
    bytes.extend_from_slice(&[0u8; 4]);
    let config = FormatConfig::default().with_max_elements(1);
    let err = deserialize_with::<f32>(&bytes, &config).expect_err("lying prefix");
    assert_eq!(err.kind(), ErrorKind::SizeMismatch);
}
