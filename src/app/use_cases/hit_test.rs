//! Use-Case: Hit-Test im Screen-Space.

use glam::Vec2;

use crate::core::{FeatureKind, RenderedFeature};
use crate::shared::MapOptions;
use crate::surface::{MapSurface, ScreenRect};

/// Treffer eines Hit-Tests mit aufgelöster Netzwerk-Art.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkHit {
    pub feature: RenderedFeature,
    pub kind: FeatureKind,
}

/// Sucht das oberste identifizierbare Feature im Fenster um `screen_pos`.
///
/// Ein identifizierbarer Objekttyp, der weder Route-Node noch Route-Segment
/// ist, bricht die Operation mit einem Fehler ab.
pub fn pick_network_feature(
    surface: &dyn MapSurface,
    screen_pos: Vec2,
    options: &MapOptions,
) -> anyhow::Result<Option<NetworkHit>> {
    let window = ScreenRect::around(screen_pos, options.hit_box_px);
    let Some(feature) = surface
        .query_rendered_features(Some(window))
        .into_iter()
        .find(|f| f.has_object_type(&options.identifiable_object_types))
    else {
        return Ok(None);
    };

    let kind = FeatureKind::from_object_type(&feature.object_type)?;
    Ok(Some(NetworkHit { feature, kind }))
}

/// Sucht ein gerendertes Netzwerk-Feature anhand seiner Domänen-ID im ganzen Viewport.
pub fn find_rendered(
    surface: &dyn MapSurface,
    mrid: &str,
    options: &MapOptions,
) -> Option<RenderedFeature> {
    surface
        .query_rendered_features(None)
        .into_iter()
        .find(|f| f.mrid == mrid && f.has_object_type(&options.identifiable_object_types))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeatureHandle;
    use crate::surface::InMemorySurface;

    fn rendered(id: u64, object_type: &str, mrid: &str) -> RenderedFeature {
        RenderedFeature {
            handle: FeatureHandle {
                layer_id: "route_network".into(),
                feature_id: id,
            },
            object_type: object_type.into(),
            mrid: mrid.into(),
            icon: None,
        }
    }

    #[test]
    fn topmost_identifiable_feature_wins() {
        let surface = InMemorySurface::new()
            .with_feature(rendered(1, "area", "A1"), Vec2::new(100.0, 100.0))
            .with_feature(rendered(2, "route_node", "N1"), Vec2::new(102.0, 100.0))
            .with_feature(rendered(3, "route_segment", "S1"), Vec2::new(98.0, 100.0));

        let hit = pick_network_feature(&surface, Vec2::new(100.0, 100.0), &MapOptions::default())
            .unwrap()
            .unwrap();

        assert_eq!(hit.feature.mrid, "N1");
        assert_eq!(hit.kind, FeatureKind::Node);
    }

    #[test]
    fn features_outside_hit_box_are_missed() {
        let surface = InMemorySurface::new()
            .with_feature(rendered(1, "route_segment", "S1"), Vec2::new(100.0, 100.0));

        let hit = pick_network_feature(&surface, Vec2::new(111.0, 100.0), &MapOptions::default())
            .unwrap();

        assert!(hit.is_none());
    }

    #[test]
    fn misconfigured_object_type_is_a_precondition_violation() {
        let surface = InMemorySurface::new()
            .with_feature(rendered(1, "conduit", "C1"), Vec2::new(0.0, 0.0));
        let mut options = MapOptions::default();
        options.identifiable_object_types.push("conduit".into());

        assert!(pick_network_feature(&surface, Vec2::ZERO, &options).is_err());
    }

    #[test]
    fn find_rendered_matches_domain_id() {
        let surface = InMemorySurface::new()
            .with_feature(rendered(1, "route_segment", "S1"), Vec2::new(0.0, 0.0))
            .with_feature(rendered(2, "route_segment", "S2"), Vec2::new(500.0, 0.0));

        let found = find_rendered(&surface, "S2", &MapOptions::default()).unwrap();
        assert_eq!(found.handle.feature_id, 2);
        assert!(find_rendered(&surface, "S3", &MapOptions::default()).is_none());
    }
}
