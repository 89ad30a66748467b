use payloads::Building;
use std::collections::HashMap;

use super::regions::Region;

/// Buildings partitioned by region code.
///
/// Each group keeps the relative order its buildings had in the input.
#[derive(Debug, Default, PartialEq)]
pub struct RegionGroups<'a> {
    groups: HashMap<&'a str, Vec<&'a Building>>,
    /// Region codes in the order they were first seen.
    encounter_order: Vec<&'a str>,
}

impl<'a> RegionGroups<'a> {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, region_code: &str) -> Option<&[&'a Building]> {
        self.groups.get(region_code).map(Vec::as_slice)
    }

    /// Region codes with at least one building: priority regions first in
    /// their fixed order, then the rest in encounter order.
    pub fn region_codes(&self) -> Vec<&'a str> {
        let mut known: Vec<(Region, &'a str)> = Vec::new();
        let mut unknown: Vec<&'a str> = Vec::new();
        for &code in &self.encounter_order {
            match Region::from_code(code) {
                Some(region) => known.push((region, code)),
                None => unknown.push(code),
            }
        }
        known.sort_by_key(|(region, _)| region.priority());
        known.into_iter().map(|(_, code)| code).chain(unknown).collect()
    }

    /// Groups in display order.
    pub fn in_display_order(&self) -> Vec<(&'a str, &[&'a Building])> {
        self.region_codes()
            .into_iter()
            .filter_map(|code| {
                self.groups
                    .get(code)
                    .map(|buildings| (code, buildings.as_slice()))
            })
            .collect()
    }
}

pub fn group_by_region<'a>(
    buildings: impl IntoIterator<Item = &'a Building>,
) -> RegionGroups<'a> {
    let mut grouped = RegionGroups::default();
    for building in buildings {
        let code = building.region.as_str();
        grouped
            .groups
            .entry(code)
            .or_insert_with(|| {
                grouped.encounter_order.push(code);
                Vec::new()
            })
            .push(building);
    }
    grouped
}
