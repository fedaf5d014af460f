
use _fixtures::{init_tracing, QUAD, SAMPLE_VEC2S};
use glpack::io::{load_array, read_binary, read_string, save_array, write_binary, write_string};
use glpack::ser::{peek_kind, serialize_u32s, serialize_vec3s};
use glpack::{Error, ErrorKind, FormatConfig, Framing, Mesh, Vec2, Vec3};
use tempfile::tempdir;

#[test]
fn quad_roundtrips_through_a_file() {
    init_tracing();
    let dir = tempdir().unwrap();
    let path = dir.path().join("quad.mesh");
    QUAD.save(&path).unwrap();
    let loaded = Mesh::load(&path).unwrap();
    assert_eq!(loaded, *QUAD);
    assert_eq!(loaded.triangle_count(), 2);
}

#[test]
fn mesh_bytes_are_two_legacy_arrays() {
    let bytes = QUAD.to_bytes().unwrap();
    let mut expected = serialize_vec3s(&QUAD.positions).unwrap().into_vec();
    expected.extend_from_slice(serialize_u32s(&QUAD.indices).unwrap().as_slice());
    assert_eq!(bytes.as_slice(), expected.as_slice());
}

#[test]
fn trailing_bytes_after_mesh_are_rejected() {
    let mut bytes = QUAD.to_bytes().unwrap().into_vec();
    bytes.push(0);
    let err = Mesh::from_bytes(&bytes).expect_err("one stray byte");
    assert!(matches!(err, Error::TrailingBytes { remaining: 1, .. }));
}

#[test]
fn truncated_mesh_is_unexpected_end() {
    let bytes = QUAD.to_bytes().unwrap().into_vec();
    let err = Mesh::from_bytes(&bytes[..bytes.len() - 1]).expect_err("indices cut short");
    assert_eq!(err.kind(), ErrorKind::UnexpectedEnd);
}

#[test]
fn out_of_range_index_is_rejected() {
    let err = Mesh::new(vec![Vec3::default(); 3], vec![0, 1, 3]).expect_err("index 3 of 3");
    assert!(matches!(
        err,
        Error::IndexOutOfRange {
            index: 3,
            len: 3,
            ..
        }
    ));

    // Decoding runs the same validation.
    let mesh = Mesh {
        positions: vec![Vec3::default(); 3],
        indices: vec![0, 1, 7],
    };
    let bytes = mesh.to_bytes().unwrap();
    assert_eq!(
        Mesh::from_bytes(bytes.as_slice()).unwrap_err().kind(),
        ErrorKind::IndexOutOfRange
    );
}

#[test]
fn missing_file_is_unopenable() {
    let dir = tempdir().unwrap();
    let err = read_binary(dir.path().join("missing.bin")).expect_err("file does not exist");
    assert!(matches!(err, Error::UnopenableFile { .. }));
    assert_eq!(err.code(), -16);
    assert!(err.location().is_none());

    let err = write_binary(dir.path().join("no/such/dir.bin"), b"x").expect_err("no parent");
    assert_eq!(err.kind(), ErrorKind::UnopenableFile);
}

#[test]
fn binary_and_text_files_roundtrip() {
    let dir = tempdir().unwrap();
    let bin = dir.path().join("data.bin");
    write_binary(&bin, &[0, 1, 2, 255]).unwrap();
    assert_eq!(read_binary(&bin).unwrap(), vec![0, 1, 2, 255]);

    let txt = dir.path().join("shader.vert");
    write_string(&txt, "void main() {}\n").unwrap();
    assert_eq!(read_string(&txt).unwrap(), "void main() {}\n");
}

#[test]
fn arrays_persist_with_configured_framing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("uvs.bin");

    let legacy = FormatConfig::default();
    save_array(&path, SAMPLE_VEC2S.as_slice(), &legacy).unwrap();
    assert_eq!(read_binary(&path).unwrap().len(), 8 + 16 * 8);
    let (uvs, count) = load_array::<Vec2>(&path, &legacy).unwrap();
    assert_eq!((uvs, count), (SAMPLE_VEC2S.clone(), 16));

    let tagged = FormatConfig::tagged();
    save_array(&path, SAMPLE_VEC2S.as_slice(), &tagged).unwrap();
    let bytes = read_binary(&path).unwrap();
    assert_eq!(peek_kind(&bytes).unwrap(), glpack::ElementKind::Vec2);
    let (uvs, _) = load_array::<Vec2>(&path, &tagged).unwrap();
    assert_eq!(uvs, *SAMPLE_VEC2S);
}

#[test]
fn config_loads_from_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("format.json");
    write_string(&path, r#"{ "framing": "tagged", "max_elements": 16 }"#).unwrap();
    let config = FormatConfig::from_json_file(&path).unwrap();
    assert_eq!(config.framing, Framing::Tagged);
    assert_eq!(config.max_elements, 16);

    write_string(&path, r#"{ "framing": "tagged", "compression": true }"#).unwrap();
    let err = FormatConfig::from_json_file(&path).expect_err("unknown field");
    assert_eq!(err.kind(), ErrorKind::Config);

    let err = FormatConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnopenableFile);
}
