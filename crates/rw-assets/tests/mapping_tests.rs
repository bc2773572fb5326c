use rw_assets::mapping::*;
use rw_core::Connectivity;

#[test]
fn test_serialize_entry_uses_side_label() {
    let entry = TileAssetEntry {
        sides: Connectivity::DOWN | Connectivity::RIGHT,
        asset: TileAsset {
            prefab: "prefabs/corner.glb".to_string(),
            glyph: Some('┌'),
        },
    };

    let json = serde_json::to_string(&entry).unwrap();
    assert!(json.contains(r#""sides":"DR""#));
    assert!(json.contains(r#""prefab":"prefabs/corner.glb""#));
}

#[test]
fn test_deserialize_mapping() {
    let json = r#"{
        "size_units": 4.0,
        "tiles": [
            {
                "sides": "ud",
                "asset": { "prefab": "prefabs/vertical.glb" }
            }
        ]
    }"#;

    let mapping: TileMapping = serde_json::from_str(json).unwrap();
    assert_eq!(mapping.size_units, 4.0);
    assert_eq!(mapping.tiles.len(), 1);
    let t = &mapping.tiles[0];
    assert_eq!(t.sides, Connectivity::UP | Connectivity::DOWN);
    assert_eq!(t.asset.glyph, None);
}

#[test]
fn test_deserialize_defaults() {
    let mapping: TileMapping = serde_json::from_str("{}").unwrap();
    assert_eq!(mapping.size_units, 10.0);
    assert!(mapping.tiles.is_empty());
}

#[test]
fn test_deserialize_rejects_bad_label() {
    let json = r#"{ "tiles": [ { "sides": "UP", "asset": { "prefab": "x" } } ] }"#;
    let err = serde_json::from_str::<TileMapping>(json).unwrap_err();
    assert!(err.to_string().contains("invalid sides label"));
}
