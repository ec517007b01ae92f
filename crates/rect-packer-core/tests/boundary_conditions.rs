use rect_packer_core::config::{Heuristic, PackerConfig};
use rect_packer_core::error::PackerError;
use rect_packer_core::model::Rect;
use rect_packer_core::packer::Packer;
use rect_packer_core::packer::maxrects::MaxRectsBinPack;

#[test]
fn test_zero_width() {
    match MaxRectsBinPack::new(0, 1024, true) {
        Err(PackerError::InvalidDimensions { width, height }) => {
            assert_eq!(width, 0);
            assert_eq!(height, 1024);
        }
        _ => panic!("Expected InvalidDimensions error"),
    }
}

#[test]
fn test_zero_height() {
    let cfg = PackerConfig {
        max_width: 1024,
        max_height: 0,
        ..Default::default()
    };
    match cfg.validate() {
        Err(PackerError::InvalidDimensions { width, height }) => {
            assert_eq!(width, 1024);
            assert_eq!(height, 0);
        }
        _ => panic!("Expected InvalidDimensions error"),
    }
    assert!(MaxRectsBinPack::from_config(cfg).is_err());
}

#[test]
fn test_oversized_dimensions() {
    let cfg = PackerConfig::builder()
        .with_max_dimensions(u32::MAX, 16)
        .build();
    match cfg.validate() {
        Err(PackerError::InvalidConfig(msg)) => assert!(msg.contains("exceed")),
        _ => panic!("Expected InvalidConfig error"),
    }
}

#[test]
fn test_unknown_heuristic_name() {
    let err = "MaxFit".parse::<Heuristic>().unwrap_err();
    assert!(matches!(err, PackerError::UnknownHeuristic(ref s) if s == "MaxFit"));
    assert!(err.to_string().contains("MaxFit"));
}

#[test]
fn test_config_from_json_defaults() {
    let cfg = PackerConfig::from_json(r#"{ "max_width": 300, "max_height": 200 }"#).unwrap();
    assert_eq!(cfg.max_width, 300);
    assert_eq!(cfg.max_height, 200);
    assert!(cfg.allow_rotation);
    assert_eq!(cfg.heuristic, Heuristic::BestAreaFit);
    assert!(!cfg.parallel);

    let cfg = PackerConfig::from_json(
        r#"{ "max_width": 64, "max_height": 64, "allow_rotation": false, "heuristic": "contactpoint" }"#,
    )
    .unwrap();
    assert!(!cfg.allow_rotation);
    assert_eq!(cfg.heuristic, Heuristic::ContactPoint);
}

#[test]
fn test_config_from_json_errors() {
    assert!(matches!(
        PackerConfig::from_json(r#"{ "max_width": 64 }"#),
        Err(PackerError::Json(_))
    ));
    assert!(matches!(
        PackerConfig::from_json(r#"{ "max_width": 64, "max_height": 64, "heuristic": "nope" }"#),
        Err(PackerError::Json(_))
    ));
    assert!(matches!(
        PackerConfig::from_json(r#"{ "max_width": 0, "max_height": 64 }"#),
        Err(PackerError::InvalidDimensions { .. })
    ));
}

#[test]
fn test_one_pixel_bin() {
    let mut p = MaxRectsBinPack::new(1, 1, true).unwrap();
    assert!(p.can_pack(1, 1));
    assert_eq!(p.pack(1, 1), Some(Rect::new(0, 0, 1, 1)));
    assert!(!p.can_pack(1, 1));
    assert!((p.occupancy() - 1.0).abs() < 1e-6);
}

#[test]
fn test_resize_does_not_rebuild_free_space() {
    let mut p = MaxRectsBinPack::new(100, 100, false).unwrap();
    p.insert(100, 60, Heuristic::BottomLeft).unwrap();
    p.set_max_width(200);
    p.set_max_height(200);
    assert_eq!(p.max_width(), 200);
    assert_eq!(p.max_height(), 200);
    // Free space still reflects the original 100x100 bin.
    assert_eq!(p.free_rects(), &[Rect::new(0, 60, 100, 40)]);
    assert!(p.insert(150, 10, Heuristic::BottomLeft).is_none());
    // Occupancy is measured against the new dimensions.
    assert!((p.occupancy() - 6000.0 / 40000.0).abs() < 1e-6);

    p.reset();
    assert_eq!(p.free_rects(), &[Rect::new(0, 0, 200, 200)]);
    assert!(p.insert(150, 10, Heuristic::BottomLeft).is_some());
}
