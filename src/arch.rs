use std::mem::size_of;

#[allow(non_camel_case_types)]
#[cfg(target_pointer_width = "32")]
pub type word = i32;

#[allow(non_camel_case_types)]
#[cfg(target_pointer_width = "64")]
pub type word = i64;

#[allow(non_camel_case_types)]
#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
pub type word = isize;

pub const WORD_SIZE: usize = size_of::<word>();

#[cfg(target_pointer_width = "32")]
pub const WORD_BIT: u32 = 32;

#[cfg(target_pointer_width = "64")]
pub const WORD_BIT: u32 = 64;

// No declared width to quote, so derive it like the C fallback does.
#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
pub const WORD_BIT: u32 = 8 * WORD_SIZE as u32;
