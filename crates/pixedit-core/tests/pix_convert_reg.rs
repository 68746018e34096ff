//! Grayscale conversion regression test

use pixedit_core::{PixelBuffer, Rgba};
use pixedit_test::{RegParams, fixtures};

#[test]
fn pix_convert_reg() {
    let mut rp = RegParams::new("pix_convert");

    let pixs = fixtures::gradient(50, 40);
    let gray = pixs.to_grayscale();
    rp.check(gray.dimensions() == pixs.dimensions(), "dimensions kept");

    let mut all_gray = true;
    let mut alpha_kept = true;
    let mut average_ok = true;
    for y in 0..pixs.height() {
        for x in 0..pixs.width() {
            let s = pixs.get_pixel_unchecked(x, y);
            let d = gray.get_pixel_unchecked(x, y);
            all_gray &= d.is_gray();
            alpha_kept &= d.a == s.a;
            let avg = ((s.r as u32 + s.g as u32 + s.b as u32) / 3) as u8;
            average_ok &= d.r == avg;
        }
    }
    rp.check(all_gray, "r == g == b everywhere");
    rp.check(alpha_kept, "alpha unchanged");
    rp.check(average_ok, "truncating channel average");
    rp.write_buffer(&gray, "gray").expect("write gray");

    // Idempotent
    rp.compare_buffers(&gray, &gray.to_grayscale());

    // In-place matches the copying form
    let mut pixm = pixs.to_mut();
    pixm.grayscale_in_place();
    rp.compare_buffers(&gray, &pixm.into());

    // Source untouched
    rp.compare_buffers(&fixtures::gradient(50, 40), &pixs);

    assert!(rp.cleanup(), "pix_convert regression test failed");
}

#[test]
fn pix_convert_values_reg() {
    let mut rp = RegParams::new("pix_convert_values");

    let cases = [
        (Rgba::new(255, 0, 0, 255), 85),
        (Rgba::new(255, 255, 255, 0), 255),
        (Rgba::new(1, 1, 0, 17), 0),
        (Rgba::new(2, 2, 1, 200), 1),
        (Rgba::new(100, 150, 200, 128), 150),
    ];
    for (src, avg) in cases {
        let pixs = PixelBuffer::filled(1, 1, src).expect("filled");
        let pixd = pixs.to_grayscale();
        rp.check(
            pixd.get_pixel(0, 0) == Ok(Rgba::new(avg, avg, avg, src.a)),
            &format!("{:?} -> {}", src, avg),
        );
    }

    let empty = PixelBuffer::new(0, 3).expect("empty");
    rp.check(empty.to_grayscale().is_empty(), "empty stays empty");

    assert!(rp.cleanup(), "pix_convert values regression test failed");
}
