use super::*;

#[test]
fn test_write_report_verbatim() {
    let mut out = Vec::new();
    write_report("maximum: 1.0\n", &mut out).unwrap();
    assert_eq!(out, b"maximum: 1.0\n");
}
