use decoder::{Decodable, Decoded, ErrorKind, Reader};
use thumb::{Decoder, Encoding};

#[track_caller]
fn test_stream(data: &[u8], expected: Encoding, width: usize) {
    let mut reader = Reader::new(data);
    let inst = match Decoder.decode(&mut reader) {
        Err(e) => panic!("failed to decode {:#x?}: {:?}", data, e),
        Ok(inst) => inst,
    };
    assert!(
        inst.encoding == expected,
        "decode error for {:#x?}:\n  decoded: {:?}\n expected: {:?}\n",
        data,
        inst.encoding,
        expected
    );
    assert_eq!(inst.width(), width, "width for {data:#x?}");
}

#[test]
fn narrow_stream_decode() {
    test_stream(&[0x70, 0x47], Encoding::BX_T1, 2);
    test_stream(&[0x00, 0xbf], Encoding::NOP_T1, 2);
    test_stream(&[0x00, 0xdf], Encoding::SVC_T1, 2);
}

#[test]
fn wide_stream_decode_assembles_halfwords_in_order() {
    // MOV.W: leading half-word 0xf04f, trailing half-word 0x050a
    test_stream(&[0x4f, 0xf0, 0x0a, 0x05], Encoding::MOV_IMM_T2, 4);
    // BL: 0xf000 0xd000
    test_stream(&[0x00, 0xf0, 0x00, 0xd0], Encoding::BL_T1, 4);
    // PUSH.W: 0xe92d 0x4ff0
    test_stream(&[0x2d, 0xe9, 0xf0, 0x4f], Encoding::PUSH_T2, 4);
}

#[test]
fn consecutive_instructions_share_one_reader() {
    let data = [0x70, 0x47, 0x4f, 0xf0, 0x0a, 0x05, 0x00, 0xbf];
    let mut reader = Reader::new(&data);

    let first = Decoder.decode(&mut reader).unwrap();
    assert_eq!(first.encoding, Encoding::BX_T1);

    let second = Decoder.decode(&mut reader).unwrap();
    assert_eq!(second.encoding, Encoding::MOV_IMM_T2);

    let third = Decoder.decode(&mut reader).unwrap();
    assert_eq!(third.encoding, Encoding::NOP_T1);

    assert!(reader.is_empty());
}

#[test]
fn cut_off_wide_instruction_reports_invalid() {
    // a wide prefix with no second half-word cannot be completed
    test_stream(&[0x4f, 0xf0], Encoding::INVALID, 2);
    test_stream(&[0x00, 0xf8], Encoding::INVALID, 2);
}

#[test]
fn exhausted_input_is_an_error() {
    let mut reader = Reader::new(&[]);
    let err = Decoder.decode(&mut reader).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExhaustedInput);

    // a lone byte cannot form a half-word either
    let mut reader = Reader::new(&[0x70]);
    let err = Decoder.decode(&mut reader).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExhaustedInput);
}
