/// The fixed byte length of a mark's `key`, `chain_id`, and `hash` fields.
/// Higher resolutions cost more wire bytes for a proportionally lower
/// chance of a forged chain ever producing a colliding link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    Low,
    Medium,
    Quartile,
    High,
}

impl Resolution {
    pub fn link_length(self) -> usize {
        match self {
            Resolution::Low => 4,
            Resolution::Medium => 8,
            Resolution::Quartile => 16,
            Resolution::High => 32,
        }
    }

    pub(crate) fn discriminator(self) -> u8 {
        match self {
            Resolution::Low => 0,
            Resolution::Medium => 1,
            Resolution::Quartile => 2,
            Resolution::High => 3,
        }
    }

    pub(crate) fn from_discriminator(value: u8) -> Option<Self> {
        match value {
            0 => Some(Resolution::Low),
            1 => Some(Resolution::Medium),
            2 => Some(Resolution::Quartile),
            3 => Some(Resolution::High),
            _ => None,
        }
    }
}
