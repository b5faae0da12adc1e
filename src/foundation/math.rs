pub(crate) fn mul_div255(x: i32, y: i32) -> i32 {
    (x * y + 127) / 255
}

pub(crate) fn mul_div255_u8(x: u8, y: u8) -> u8 {
    mul_div255(i32::from(x), i32::from(y)) as u8
}
