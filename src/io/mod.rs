mod endian;
mod file;

pub use endian::{read_u16_be, read_u16_le, read_u32_be, read_u32_le};
pub use file::{read_image_file, write_output_file};
