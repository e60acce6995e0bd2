//! Binary save format for inventory containers.
//!
//! ```text
//! [4 bytes magic "INVS"][u16 LE format version][u32 LE slot count]
//! [u32 LE length][bincode serialized SlotRecord]   (once per slot)
//! ```
//!
//! Slot allow-lists are layout, not state, and are not written.

use inventory_core::{AttributeBuff, InventoryContainer, InventorySlot, ItemId, ItemInstance};
use serde::{Deserialize, Serialize};

use crate::repository::{RepositoryError, Result};

pub const MAGIC: [u8; 4] = *b"INVS";
pub const FORMAT_VERSION: u16 = 1;

const HEADER_LEN: usize = MAGIC.len() + 2 + 4;
const LENGTH_PREFIX: usize = 4;

/// Persisted form of one slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    /// `-1` for "no item".
    pub item_id: i32,
    pub name: String,
    pub quantity: u32,
    pub buffs: Vec<AttributeBuff>,
    pub stackable: bool,
    pub droppable: bool,
    pub force_stackable_with_buffs: bool,
}

impl TryFrom<&InventorySlot> for SlotRecord {
    type Error = RepositoryError;

    fn try_from(slot: &InventorySlot) -> Result<Self> {
        let item_id = ItemId::to_raw(slot.item.id).map_err(|_| {
            RepositoryError::Serialization(format!(
                "item id {:?} does not fit the saved id range",
                slot.item.id
            ))
        })?;
        Ok(Self {
            item_id,
            name: slot.item.name.clone(),
            quantity: slot.quantity,
            buffs: slot.item.buffs.clone(),
            stackable: slot.item.is_stackable(),
            droppable: slot.item.droppable,
            force_stackable_with_buffs: slot.item.force_stackable_with_buffs(),
        })
    }
}

impl From<SlotRecord> for InventorySlot {
    fn from(mut record: SlotRecord) -> Self {
        for buff in &mut record.buffs {
            buff.set_value(buff.value());
        }
        let item = ItemInstance::new(
            record.name,
            ItemId::from_raw(i64::from(record.item_id)),
            record.buffs,
            record.stackable,
            record.droppable,
            record.force_stackable_with_buffs,
        );
        InventorySlot::new(item, record.quantity)
    }
}

/// Encodes every slot of `container`.
pub fn encode(container: &InventoryContainer) -> Result<Vec<u8>> {
    let count = u32::try_from(container.capacity()).map_err(|_| {
        RepositoryError::Serialization(format!(
            "container has {} slots, more than the format allows",
            container.capacity()
        ))
    })?;

    let mut out = Vec::with_capacity(HEADER_LEN + container.capacity() * 32);
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    out.extend_from_slice(&count.to_le_bytes());

    for slot in container.slots() {
        let bytes = bincode::serialize(&SlotRecord::try_from(slot)?)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        let len = u32::try_from(bytes.len())
            .map_err(|_| RepositoryError::Serialization("slot record too large".into()))?;
        out.extend_from_slice(&len.to_le_bytes());
        out.extend_from_slice(&bytes);
    }

    Ok(out)
}

/// Decodes a complete save. Nothing is returned unless every record parses.
pub fn decode(bytes: &[u8]) -> Result<InventoryContainer> {
    let mut reader = Reader::new(bytes);

    let magic = reader.take(MAGIC.len(), "magic")?;
    if magic != MAGIC {
        return Err(RepositoryError::CorruptedData(format!(
            "bad magic {:02x?}",
            magic
        )));
    }

    let version = u16::from_le_bytes(reader.array::<2>("format version")?);
    if version != FORMAT_VERSION {
        return Err(RepositoryError::UnsupportedVersion {
            found: version,
            supported: FORMAT_VERSION,
        });
    }

    let count = u32::from_le_bytes(reader.array::<4>("slot count")?) as usize;
    // Every record needs at least its length prefix; cap the allocation by that.
    let mut slots = Vec::with_capacity(count.min(reader.remaining() / LENGTH_PREFIX));

    for index in 0..count {
        let len = u32::from_le_bytes(reader.array::<4>("record length")?) as usize;
        let body = reader.take(len, "slot record")?;
        let record: SlotRecord = bincode::deserialize(body).map_err(|e| {
            RepositoryError::CorruptedData(format!("slot {}: {}", index, e))
        })?;
        slots.push(InventorySlot::from(record));
    }

    if reader.remaining() > 0 {
        return Err(RepositoryError::CorruptedData(format!(
            "{} trailing bytes after {} slots",
            reader.remaining(),
            count
        )));
    }

    Ok(InventoryContainer::from_slots(slots))
}

struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    fn take(&mut self, len: usize, what: &str) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(RepositoryError::CorruptedData(format!(
                "truncated {} at offset {}: need {} bytes, have {}",
                what,
                self.offset,
                len,
                self.remaining()
            )));
        }
        let slice = &self.bytes[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    fn array<const N: usize>(&mut self, what: &str) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N, what)?);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::{Attribute, ItemType};

    fn sample() -> InventoryContainer {
        let mut container = InventoryContainer::new(3).with_allowed(2, ItemType::Helmet);
        let sword = ItemInstance::new(
            "Sword",
            Some(ItemId(1)),
            vec![AttributeBuff::fixed(Attribute::Strength, 1, 9, 4)],
            false,
            true,
            false,
        );
        container.slots_mut()[0].update(sword, 1);
        let apple = ItemInstance::new("Apple", Some(ItemId(0)), Vec::new(), true, true, false);
        container.slots_mut()[2].update(apple, 7);
        container
    }

    #[test]
    fn header_layout() {
        let bytes = encode(&sample()).unwrap();
        assert_eq!(&bytes[..4], b"INVS");
        assert_eq!(u16::from_le_bytes([bytes[4], bytes[5]]), FORMAT_VERSION);
        assert_eq!(u32::from_le_bytes([bytes[6], bytes[7], bytes[8], bytes[9]]), 3);
    }

    #[test]
    fn decoded_slots_keep_contents_but_not_layout() {
        let original = sample();
        let decoded = decode(&encode(&original).unwrap()).unwrap();

        assert_eq!(decoded.capacity(), 3);
        for (saved, restored) in original.slots().iter().zip(decoded.slots()) {
            assert_eq!(saved.item, restored.item);
            assert_eq!(saved.quantity, restored.quantity);
        }
        assert!(decoded.slot(1).unwrap().is_empty());
        assert_eq!(decoded.slot(1).unwrap().item.id, None);
        assert!(decoded.slot(2).unwrap().allowed.is_empty());
        assert_eq!(decoded.slot(0).unwrap().item.buffs[0].value(), 4);
    }

    #[test]
    fn out_of_range_buff_values_are_clamped_on_decode() {
        let mut container = sample();
        let buff = &mut container.slots_mut()[0].item.buffs[0];
        *buff = AttributeBuff::fixed(Attribute::Strength, 1, 20, 15);
        buff.max = 9;
        assert_eq!(buff.value(), 15);

        let decoded = decode(&encode(&container).unwrap()).unwrap();
        let restored = decoded.slot(0).unwrap().item.buffs[0];
        assert_eq!((restored.min, restored.max, restored.value()), (1, 9, 9));
    }

    #[test]
    fn ids_beyond_i32_refuse_to_encode() {
        let mut container = sample();
        container.slots_mut()[0].item.id = Some(ItemId(u32::MAX));
        assert!(matches!(
            encode(&container),
            Err(RepositoryError::Serialization(_))
        ));
    }

    #[test]
    fn bad_magic_is_corruption() {
        let mut bytes = encode(&sample()).unwrap();
        bytes[0] = b'X';
        assert!(matches!(decode(&bytes), Err(RepositoryError::CorruptedData(_))));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let mut bytes = encode(&sample()).unwrap();
        bytes[4..6].copy_from_slice(&99u16.to_le_bytes());
        assert!(matches!(
            decode(&bytes),
            Err(RepositoryError::UnsupportedVersion { found: 99, .. })
        ));
    }

    #[test]
    fn truncation_and_trailing_bytes_are_corruption() {
        let bytes = encode(&sample()).unwrap();
        assert!(matches!(
            decode(&bytes[..bytes.len() - 1]),
            Err(RepositoryError::CorruptedData(_))
        ));
        assert!(matches!(decode(&bytes[..3]), Err(RepositoryError::CorruptedData(_))));

        let mut longer = bytes.clone();
        longer.push(0);
        assert!(matches!(decode(&longer), Err(RepositoryError::CorruptedData(_))));
    }

    #[test]
    fn huge_slot_count_does_not_preallocate() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&MAGIC);
        bytes.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
        bytes.extend_from_slice(&u32::MAX.to_le_bytes());
        assert!(matches!(decode(&bytes), Err(RepositoryError::CorruptedData(_))));
    }
}
