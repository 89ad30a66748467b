use payloads::Building;

/// Text a building is matched against: name, code, then the non-empty
/// address fields.
pub fn search_text(building: &Building) -> String {
    let mut text = format!("{} {}", building.name, building.code);
    for part in building.address_parts() {
        text.push(' ');
        text.push_str(part);
    }
    text.to_lowercase()
}

/// Case-insensitive substring filter. A blank query keeps every building.
///
/// The relative order of the input is preserved.
pub fn filter_buildings<'a>(
    buildings: impl IntoIterator<Item = &'a Building>,
    query: &str,
) -> Vec<&'a Building> {
    let needle = query.trim().to_lowercase();
    buildings
        .into_iter()
        .filter(|building| {
            needle.is_empty() || search_text(building).contains(&needle)
        })
        .collect()
}
