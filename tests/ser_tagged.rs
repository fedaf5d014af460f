
use _fixtures::{hex, SAMPLE_F32S, SAMPLE_U32S, SAMPLE_VEC2S, SAMPLE_VEC3S, SAMPLE_VEC4S};
use glpack::ser::{
    decode_framed, deserialize_any, deserialize_tagged, encode_framed, peek_kind,
    serialize_tagged, serialize_tagged_as, AnyArray, ByteReader, Endianness, TaggedHeader,
    TAGGED_HEADER_SIZE,
};
use glpack::{ElementKind, Error, FormatConfig, Vec3, Vec4};
use insta::assert_snapshot;

fn foreign() -> Endianness {
    match Endianness::native() {
        Endianness::Little => Endianness::Big,
        Endianness::Big => Endianness::Little,
    }
}

#[test]
fn tagged_roundtrip_for_every_kind() {
    let buffer = serialize_tagged(&SAMPLE_VEC3S[..]).unwrap();
    assert_eq!(buffer.len(), TAGGED_HEADER_SIZE + 3 * 12);
    assert_eq!(deserialize_tagged::<Vec3>(buffer.as_slice()).unwrap().0, *SAMPLE_VEC3S);

    let cases = [
        AnyArray::F32(SAMPLE_F32S.clone()),
        AnyArray::U32(SAMPLE_U32S.clone()),
        AnyArray::Vec2(SAMPLE_VEC2S.clone()),
        AnyArray::Vec3(SAMPLE_VEC3S.clone()),
        AnyArray::Vec4(SAMPLE_VEC4S.clone()),
    ];
    for array in cases {
        let buffer = array.serialize_tagged().unwrap();
        assert_eq!(peek_kind(buffer.as_slice()).unwrap(), array.kind());
        assert_eq!(
            buffer.len(),
            TAGGED_HEADER_SIZE + array.len() * array.kind().width()
        );
        assert_eq!(deserialize_any(buffer.as_slice()).unwrap(), array);
    }
}

#[test]
fn wrong_kind_is_an_error() {
    let buffer = serialize_tagged(&[Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)]).unwrap();
    let err = deserialize_tagged::<u32>(buffer.as_slice()).expect_err("vec3 is not u32");
    assert!(matches!(
        err,
        Error::KindMismatch {
            expected: ElementKind::U32,
            found: ElementKind::Vec3
        }
    ));
}

#[test]
fn unknown_tag_is_an_error() {
    let mut bytes = serialize_tagged(&[1u32]).unwrap().into_vec();
    bytes[0] = 0x7f;
    assert!(matches!(
        deserialize_any(&bytes),
        Err(Error::UnknownTag { tag: 0x7f })
    ));
}

#[test]
fn unknown_byte_order_is_an_error() {
    let mut bytes = serialize_tagged(&[1u32]).unwrap().into_vec();
    bytes[1] = 9;
    assert!(matches!(
        deserialize_tagged::<u32>(&bytes),
        Err(Error::UnknownByteOrder { marker: 9 })
    ));
}

#[test]
fn foreign_byte_order_is_normalized() {
    let values = vec![Vec4::new(1.0, -2.0, 3.5, f32::MIN_POSITIVE); 5];
    let buffer = serialize_tagged_as(&values, foreign()).unwrap();
    assert_ne!(buffer, serialize_tagged(&values).unwrap());

    let mut cursor = ByteReader::new(buffer.as_slice());
    let header = TaggedHeader::read(&mut cursor).unwrap();
    assert_eq!(header.byte_order, foreign());
    assert_eq!(header.count, 5);

    let (decoded, count) = deserialize_tagged::<Vec4>(buffer.as_slice()).unwrap();
    assert_eq!(count, 5);
    assert_eq!(decoded, values);
}

#[test]
fn tagged_size_mismatch() {
    let buffer = serialize_tagged(&[1.0f32, 2.0]).unwrap();
    let err = deserialize_tagged::<f32>(&buffer.as_slice()[..17]).expect_err("truncated");
    assert!(matches!(
        err,
        Error::SizeMismatch {
            expected: 18,
            actual: 17,
            ..
        }
    ));
}

#[test]
fn framing_follows_config() {
    let legacy = FormatConfig::default();
    let tagged = FormatConfig::tagged();
    let legacy_bytes = encode_framed(&SAMPLE_U32S[..], &legacy).unwrap();
    let tagged_bytes = encode_framed(&SAMPLE_U32S[..], &tagged).unwrap();
    assert_eq!(tagged_bytes.len(), legacy_bytes.len() + 2);
    assert_eq!(
        decode_framed::<u32>(legacy_bytes.as_slice(), &legacy).unwrap().0,
        *SAMPLE_U32S
    );
    assert_eq!(
        decode_framed::<u32>(tagged_bytes.as_slice(), &tagged).unwrap().0,
        *SAMPLE_U32S
    );
    // A tagged buffer read as legacy fails the length check.
    assert!(decode_framed::<u32>(tagged_bytes.as_slice(), &legacy).is_err());
}

#[test]
fn empty_buffer_has_no_kind() {
    assert!(matches!(peek_kind(&[]), Err(Error::UnexpectedEnd { .. })));
}

#[cfg(target_endian = "little")]
#[test]
fn snapshot_tagged_layout() {
    let buffer = serialize_tagged(&[1u32, 0xdead_beef]).unwrap();
    assert_snapshot!(
        hex(buffer.as_slice()),
        @"02 00 02 00 00 00 00 00 00 00 01 00 00 00 ef be ad de"
    );
    let big = serialize_tagged_as(&[1u32, 0xdead_beef], Endianness::Big).unwrap();
    assert_snapshot!(
        hex(big.as_slice()),
        @"02 01 00 00 00 00 00 00 00 02 00 00 00 01 de ad be ef"
    );
}
