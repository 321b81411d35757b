use crate::Color;

pub fn assert_almost_equal(c1: &Color, c2: &Color) {
    let [r1, g1, b1] = c1.to_rgb_float().to_u8();
    let [r2, g2, b2] = c2.to_rgb_float().to_u8();

    assert!((r1 as i32 - r2 as i32).abs() <= 1, "{:?} != {:?}", c1, c2);
    assert!((g1 as i32 - g2 as i32).abs() <= 1, "{:?} != {:?}", c1, c2);
    assert!((b1 as i32 - b2 as i32).abs() <= 1, "{:?} != {:?}", c1, c2);
}
