/// Maximum length in bytes of a single instruction template.
///
/// Larger than any documented or undocumented instruction so that compound
/// templates can be added without changing the table layout.
pub const INSTR_MAX_LEN: usize = 8;
