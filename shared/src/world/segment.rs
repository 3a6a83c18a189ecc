use gridrep_serde::{ByteReader, ByteWrite, ConstByteLength, Serde, SerdeErr};

use crate::types::EntityId;

pub const SECTION_HEADER_BYTES: usize = 8;
pub const ENTRY_HEADER_BYTES: usize = 10;

/// Largest payload a single entry can carry.
pub const MAX_ENTRY_PAYLOAD: usize = u16::MAX as usize;

/// Which kind of change a section carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Create,
    Update,
    Remove,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [SectionKind::Create, SectionKind::Update, SectionKind::Remove];

    pub fn to_wire(self) -> u8 {
        match self {
            SectionKind::Create => 0,
            SectionKind::Update => 1,
            SectionKind::Remove => 2,
        }
    }

    pub fn from_wire(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(SectionKind::Create),
            1 => Some(SectionKind::Update),
            2 => Some(SectionKind::Remove),
            _ => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        self.to_wire() as usize
    }
}

/// Leads every section: its kind, how many entries follow and how many
/// bytes those entries (headers included) take up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionHeader {
    pub kind: u8,
    pub amount: u16,
    pub size: u32,
}

impl SectionHeader {
    pub fn new(kind: SectionKind, amount: u16, size: u32) -> Self {
        Self {
            kind: kind.to_wire(),
            amount,
            size,
        }
    }

    pub fn section_kind(&self) -> Option<SectionKind> {
        SectionKind::from_wire(self.kind)
    }
}

impl Serde for SectionHeader {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        self.kind.ser(writer);
        // reserved
        0u8.ser(writer);
        self.amount.ser(writer);
        self.size.ser(writer);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let kind = u8::de(reader)?;
        let _reserved = u8::de(reader)?;
        let amount = u16::de(reader)?;
        let size = u32::de(reader)?;
        Ok(Self { kind, amount, size })
    }

    fn byte_length(&self) -> usize {
        SECTION_HEADER_BYTES
    }
}

impl ConstByteLength for SectionHeader {
    fn const_byte_length() -> usize {
        SECTION_HEADER_BYTES
    }
}

/// Leads every entry: the entity it concerns and the payload length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryHeader {
    pub entity_id: EntityId,
    pub size: u16,
}

impl Serde for EntryHeader {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        self.entity_id.ser(writer);
        self.size.ser(writer);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let entity_id = EntityId::de(reader)?;
        let size = u16::de(reader)?;
        Ok(Self { entity_id, size })
    }

    fn byte_length(&self) -> usize {
        ENTRY_HEADER_BYTES
    }
}

impl ConstByteLength for EntryHeader {
    fn const_byte_length() -> usize {
        ENTRY_HEADER_BYTES
    }
}

/// Bytes taken by a section holding `amount` entries of `payload` bytes each.
pub fn section_length(amount: usize, payload: usize) -> usize {
    SECTION_HEADER_BYTES + (ENTRY_HEADER_BYTES + payload) * amount
}
