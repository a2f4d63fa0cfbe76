//! Advertising data (AD) structures
//!
//! An advertising payload is a sequence of `length, type, data` triples where
//! `length` counts the type byte plus the data. Parsing stops at the first
//! zero length or at a structure that would run past the payload.

use crate::gap::constants::*;

/// One AD structure borrowed from an advertising payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdStructure<'a> {
    pub ad_type: u8,
    pub data: &'a [u8],
}

/// Iterator over the AD structures of an advertising payload
#[derive(Debug, Clone)]
pub struct AdStructures<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> AdStructures<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }
}

impl<'a> Iterator for AdStructures<'a> {
    type Item = AdStructure<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let length = *self.data.get(self.offset)? as usize;
        if length == 0 || self.offset + length >= self.data.len() {
            self.offset = self.data.len();
            return None;
        }

        let ad_type = self.data[self.offset + 1];
        let data = &self.data[self.offset + 2..self.offset + 1 + length];
        self.offset += 1 + length;

        Some(AdStructure { ad_type, data })
    }
}

/// Finds the first AD structure of the given type
pub fn find_ad_type(data: &[u8], ad_type: u8) -> Option<&[u8]> {
    AdStructures::new(data)
        .find(|ad| ad.ad_type == ad_type)
        .map(|ad| ad.data)
}

/// Complete local name, falling back to the shortened one
pub fn local_name(data: &[u8]) -> Option<String> {
    find_ad_type(data, ADV_TYPE_COMPLETE_LOCAL_NAME)
        .or_else(|| find_ad_type(data, ADV_TYPE_SHORT_LOCAL_NAME))
        .map(|name| String::from_utf8_lossy(name).into_owned())
}

/// Manufacturer specific data as `(company_id, data)`
pub fn manufacturer_data(data: &[u8]) -> Option<(u16, &[u8])> {
    let ad = find_ad_type(data, ADV_TYPE_MANUFACTURER_SPECIFIC_DATA)?;
    if ad.len() < 2 {
        return None;
    }
    Some((u16::from_le_bytes([ad[0], ad[1]]), &ad[2..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ad_structures() {
        let data = [
            0x02, ADV_TYPE_FLAGS, 0x06, // Flags
            0x03, ADV_TYPE_COMPLETE_LOCAL_NAME, b'E', b'P', // Name
            0x05, ADV_TYPE_MANUFACTURER_SPECIFIC_DATA, 0xD5, 0x02, 0x01, 0x02,
        ];

        let ads: Vec<_> = AdStructures::new(&data).collect();
        assert_eq!(ads.len(), 3);
        assert_eq!(ads[0].ad_type, ADV_TYPE_FLAGS);
        assert_eq!(ads[0].data, &[0x06]);

        assert_eq!(local_name(&data).as_deref(), Some("EP"));
        assert_eq!(manufacturer_data(&data), Some((0x02D5, &[0x01, 0x02][..])));
    }

    #[test]
    fn test_ad_structures_stop_on_truncation() {
        // Second structure claims 4 bytes but only 2 remain
        let data = [0x02, ADV_TYPE_FLAGS, 0x06, 0x04, ADV_TYPE_SHORT_LOCAL_NAME, b'x'];
        let ads: Vec<_> = AdStructures::new(&data).collect();
        assert_eq!(ads.len(), 1);

        // Zero length terminates the list
        let data = [0x00, 0x02, ADV_TYPE_FLAGS, 0x06];
        assert_eq!(AdStructures::new(&data).count(), 0);

        assert_eq!(AdStructures::new(&[]).count(), 0);
    }
}
