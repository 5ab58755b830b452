use super::*;

#[test]
fn glyph_id_is_a_number() {
    assert_eq!(serde_json::to_string(&GlyphId16::new(7)).unwrap(), "7");
    let back: GlyphId16 = serde_json::from_str("7").unwrap();
    assert_eq!(back, GlyphId16::new(7));
}

#[test]
fn color_is_its_packed_value() {
    let color = Argb::new(1, 2, 3, 4);
    let json = serde_json::to_string(&color).unwrap();
    assert_eq!(json, "16909060");
    assert_eq!(serde_json::from_str::<Argb>(&json).unwrap(), color);
}
