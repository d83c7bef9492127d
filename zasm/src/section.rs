/// The logical address spaces an assembled value can belong to.
///
/// `Abs` is the union of `Text` and `Data`: a value that does not depend on
/// where any section is loaded. Representing the sections as a two-bit set
/// makes [`combine`](#method.combine) a plain intersection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Undef,
    Text,
    Data,
    Abs,
}

impl Section {
    const fn bits(self) -> u8 {
        match self {
            Section::Undef => 0,
            Section::Text => 1,
            Section::Data => 2,
            Section::Abs => 3,
        }
    }

    const fn from_bits(bits: u8) -> Section {
        match bits {
            1 => Section::Text,
            2 => Section::Data,
            3 => Section::Abs,
            _ => Section::Undef,
        }
    }

    /// The section of a sum of two values from these sections.
    ///
    /// `Abs` is the identity; equal sections stay themselves; mixing `Text`
    /// and `Data` yields `Undef`, which callers must treat as an error.
    pub fn combine(self, other: Section) -> Section {
        Section::from_bits(self.bits() & other.bits())
    }
}

#[cfg(test)]
mod test {
    use super::Section;

    #[test]
    fn abs_is_the_identity() {
        for &sec in &[Section::Text, Section::Data, Section::Abs] {
            assert_eq!(Section::Abs.combine(sec), sec);
            assert_eq!(sec.combine(Section::Abs), sec);
        }
    }

    #[test]
    fn equal_sections_combine_to_themselves() {
        assert_eq!(Section::Text.combine(Section::Text), Section::Text);
        assert_eq!(Section::Data.combine(Section::Data), Section::Data);
    }

    #[test]
    fn mixing_text_and_data_is_undefined() {
        assert_eq!(Section::Text.combine(Section::Data), Section::Undef);
        assert_eq!(Section::Data.combine(Section::Text), Section::Undef);
    }
}
