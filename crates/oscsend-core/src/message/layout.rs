pub const ALIGN: usize = 4;

pub const TYPE_TAG_PREFIX: char = ',';
pub const TAG_FLOAT: char = 'f';
pub const TAG_STRING: char = 's';
