/// World-level cone rendering style.
///
/// `Round` keeps the natural circular arc as the cone's far edge; `Flat`
/// closes the cone with a straight chord through the nominal distance point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConeStyle {
    #[default]
    Round,
    Flat,
}

/// World-level settings read by the shape resolver.
///
/// These are snapshot values: the resolver reads them once per computation
/// and never writes them. Persistence is the host's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneSettings {
    pub cone_style: ConeStyle,
    /// Whether templates are wall-constrained when they carry no explicit
    /// per-template override.
    pub wall_constrained_default: bool,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            cone_style: ConeStyle::Round,
            wall_constrained_default: true,
        }
    }
}
