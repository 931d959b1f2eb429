//! Rendering tests through the public library API

use techo::face::{Face, FaceId, Pixel, FACE_HEIGHT};
use techo::layout::{Alignment, Layout};
use techo::message::sanitize;
use techo::render::render;

fn render_to_string(face: Face, raw: &str, alignment: Alignment, columns: usize) -> String {
    let message = sanitize(raw);
    let layout = Layout::prepare(face, &message, alignment, columns).expect("layout");
    let mut out = Vec::new();
    render(&layout, &message, &mut out).expect("render");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn snapshot_small_face_right() {
    let face = Face::from_rows(&["..11", ".1..", "...."]).unwrap();
    let text = render_to_string(face, "hi there", Alignment::Right, 12).replace('\x1b', "\\e");
    insta::assert_snapshot!("small_face_right", text.trim_end());
}

#[test]
fn left_mode_wraps_wide_text_at_the_edge() {
    let face = Face::from_rows(&["1.", "1.", "1."]).unwrap();
    // 10 columns, face takes 4: room for three wide characters per row
    let text = render_to_string(face, "あいうえお", Alignment::Left, 10);
    let plain = crate::helpers::strip_sgr(&text);
    let lines: Vec<&str> = plain.lines().collect();

    // Mirrored face: background first, then ink
    assert_eq!(lines, vec!["    ", "    あいう", "    えお  "]);
}

#[test]
fn all_stock_faces_render() {
    for id in FaceId::all() {
        let text = render_to_string(Face::load(id), "テト", Alignment::Right, 80);
        assert_eq!(text.matches('\n').count(), FACE_HEIGHT, "face {:?}", id);
        assert_eq!(crate::helpers::visible(&text), "テト");
    }
}

#[test]
fn rendering_does_not_touch_stock_faces() {
    let before = Face::load(FaceId::default());
    let _ = render_to_string(Face::load(FaceId::default()), "x", Alignment::Left, 80);
    assert_eq!(Face::load(FaceId::default()), before);
    assert_eq!(before.rows()[0][0], Pixel::Background);
}
