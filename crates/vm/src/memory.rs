//! Segmented memory: segment table plus free-list recycling.
//!
//! Segments are fixed-length arrays of 32-bit words addressed by
//! (segment id, offset). Segment 0 holds the executing program image and
//! stays mapped for the machine's whole lifetime. Unmapped ids go on the
//! free list and are reused by later maps; an id is either mapped or on
//! the free list, never both.

use crate::error::MemoryFault;

/// The machine's segmented memory.
#[derive(Debug, Clone)]
pub struct Memory {
    /// Slot per segment id; `None` marks an unmapped slot.
    segments: Vec<Option<Vec<u32>>>,
    /// Unmapped ids available for reuse.
    free: Vec<u32>,
}

impl Memory {
    /// Create a memory whose segment 0 holds the given program image.
    pub fn new(segment_zero: Vec<u32>) -> Self {
        Self {
            segments: vec![Some(segment_zero)],
            free: Vec::new(),
        }
    }

    /// Map a zero-filled segment of `length` words and return its id.
    ///
    /// Reuses a free id if one exists, otherwise grows the table. Segment 0
    /// is installed at construction, so this never returns 0 to a running
    /// program.
    pub fn map(&mut self, length: u32) -> u32 {
        let segment = vec![0u32; length as usize];
        match self.free.pop() {
            Some(id) => {
                self.segments[id as usize] = Some(segment);
                id
            }
            None => {
                self.segments.push(Some(segment));
                (self.segments.len() - 1) as u32
            }
        }
    }

    /// Unmap segment `id` and push the id onto the free list.
    pub fn unmap(&mut self, id: u32) -> Result<(), MemoryFault> {
        if id == 0 {
            return Err(MemoryFault::UnmapSegmentZero);
        }
        match self.segments.get_mut(id as usize) {
            Some(slot) if slot.is_some() => {
                *slot = None;
                self.free.push(id);
                Ok(())
            }
            _ => Err(MemoryFault::UnmapUnmapped { segment: id }),
        }
    }

    /// Read the word at `offset` of segment `segment`.
    pub fn get(&self, segment: u32, offset: u32) -> Result<u32, MemoryFault> {
        let words = self.segment(segment)?;
        words
            .get(offset as usize)
            .copied()
            .ok_or(MemoryFault::OffsetOutOfBounds {
                segment,
                offset,
                length: words.len() as u32,
            })
    }

    /// Write `value` to `offset` of segment `segment`.
    pub fn put(&mut self, segment: u32, offset: u32, value: u32) -> Result<(), MemoryFault> {
        let words = self
            .segments
            .get_mut(segment as usize)
            .and_then(|slot| slot.as_mut())
            .ok_or(MemoryFault::UnmappedSegment { segment })?;
        let length = words.len() as u32;
        match words.get_mut(offset as usize) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(MemoryFault::OffsetOutOfBounds {
                segment,
                offset,
                length,
            }),
        }
    }

    /// Replace segment 0's contents with a copy of segment `id`.
    ///
    /// The copy is deep: segment `id` stays mapped and the two share no
    /// storage afterwards.
    pub fn replace_segment_zero(&mut self, id: u32) -> Result<(), MemoryFault> {
        let copy = self.segment(id)?.to_vec();
        self.segments[0] = Some(copy);
        Ok(())
    }

    /// The executing program image.
    pub fn segment_zero(&self) -> &[u32] {
        self.segments[0].as_deref().unwrap_or(&[])
    }

    /// Whether `id` is currently mapped.
    pub fn is_mapped(&self, id: u32) -> bool {
        matches!(self.segments.get(id as usize), Some(Some(_)))
    }

    fn segment(&self, id: u32) -> Result<&[u32], MemoryFault> {
        self.segments
            .get(id as usize)
            .and_then(|slot| slot.as_deref())
            .ok_or(MemoryFault::UnmappedSegment { segment: id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory() -> Memory {
        Memory::new(vec![0x7000_0000])
    }

    #[test]
    fn segment_zero_holds_program() {
        let mem = memory();
        assert_eq!(mem.segment_zero(), &[0x7000_0000]);
        assert!(mem.is_mapped(0));
    }

    #[test]
    fn map_returns_fresh_nonzero_id() {
        let mut mem = memory();
        let id = mem.map(4);
        assert_eq!(id, 1);
        assert!(mem.is_mapped(id));
    }

    #[test]
    fn mapped_segment_is_zero_filled() {
        let mut mem = memory();
        let id = mem.map(3);
        for off in 0..3 {
            assert_eq!(mem.get(id, off), Ok(0));
        }
    }

    #[test]
    fn put_then_get() {
        let mut mem = memory();
        let id = mem.map(4);
        mem.put(id, 2, 0x2A).unwrap();
        assert_eq!(mem.get(id, 2), Ok(0x2A));
    }

    #[test]
    fn get_out_of_bounds() {
        let mut mem = memory();
        let id = mem.map(4);
        assert_eq!(
            mem.get(id, 4),
            Err(MemoryFault::OffsetOutOfBounds {
                segment: id,
                offset: 4,
                length: 4
            })
        );
    }

    #[test]
    fn put_out_of_bounds() {
        let mut mem = memory();
        let id = mem.map(1);
        assert_eq!(
            mem.put(id, 1, 7),
            Err(MemoryFault::OffsetOutOfBounds {
                segment: id,
                offset: 1,
                length: 1
            })
        );
    }

    #[test]
    fn zero_length_segment_rejects_every_access() {
        let mut mem = memory();
        let id = mem.map(0);
        assert!(mem.is_mapped(id));
        assert!(matches!(
            mem.get(id, 0),
            Err(MemoryFault::OffsetOutOfBounds { length: 0, .. })
        ));
        assert!(matches!(
            mem.put(id, 0, 1),
            Err(MemoryFault::OffsetOutOfBounds { length: 0, .. })
        ));
    }

    #[test]
    fn access_to_unmapped_segment() {
        let mem = memory();
        assert_eq!(
            mem.get(9, 0),
            Err(MemoryFault::UnmappedSegment { segment: 9 })
        );
    }

    #[test]
    fn unmap_releases_and_map_reuses_the_id() {
        let mut mem = memory();
        let id = mem.map(4);
        mem.unmap(id).unwrap();
        assert!(!mem.is_mapped(id));
        let reused = mem.map(2);
        assert_eq!(reused, id);
        assert_eq!(mem.get(reused, 0), Ok(0));
    }

    #[test]
    fn unmap_segment_zero_is_a_fault() {
        let mut mem = memory();
        assert_eq!(mem.unmap(0), Err(MemoryFault::UnmapSegmentZero));
        assert!(mem.is_mapped(0));
    }

    #[test]
    fn double_unmap_is_a_fault() {
        let mut mem = memory();
        let id = mem.map(4);
        mem.unmap(id).unwrap();
        assert_eq!(
            mem.unmap(id),
            Err(MemoryFault::UnmapUnmapped { segment: id })
        );
    }

    #[test]
    fn unmap_of_never_mapped_id_is_a_fault() {
        let mut mem = memory();
        assert_eq!(
            mem.unmap(42),
            Err(MemoryFault::UnmapUnmapped { segment: 42 })
        );
    }

    #[test]
    fn mapped_and_free_are_disjoint() {
        let mut mem = memory();
        let a = mem.map(1);
        let b = mem.map(1);
        let c = mem.map(1);
        mem.unmap(b).unwrap();
        assert!(mem.is_mapped(a));
        assert!(!mem.is_mapped(b));
        assert!(mem.is_mapped(c));
        // The freed id comes back exactly once.
        let first = mem.map(1);
        assert_eq!(first, b);
        let second = mem.map(1);
        assert_ne!(second, b);
    }

    #[test]
    fn replace_segment_zero_copies_contents() {
        let mut mem = memory();
        let id = mem.map(2);
        mem.put(id, 0, 0xAAAA).unwrap();
        mem.put(id, 1, 0xBBBB).unwrap();
        mem.replace_segment_zero(id).unwrap();
        assert_eq!(mem.segment_zero(), &[0xAAAA, 0xBBBB]);
        assert!(mem.is_mapped(id));
    }

    #[test]
    fn replace_segment_zero_is_a_deep_copy() {
        let mut mem = memory();
        let id = mem.map(1);
        mem.put(id, 0, 1).unwrap();
        mem.replace_segment_zero(id).unwrap();
        // Mutating the source afterwards must not show through.
        mem.put(id, 0, 2).unwrap();
        assert_eq!(mem.segment_zero(), &[1]);
        assert_eq!(mem.get(0, 0), Ok(1));
        assert_eq!(mem.get(id, 0), Ok(2));
    }

    #[test]
    fn replace_segment_zero_from_unmapped_is_a_fault() {
        let mut mem = memory();
        assert_eq!(
            mem.replace_segment_zero(3),
            Err(MemoryFault::UnmappedSegment { segment: 3 })
        );
    }
}
